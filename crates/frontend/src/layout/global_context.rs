use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The three back-office screens. They are mutually exclusive: exactly
/// one is mounted at a time, so each keeps its own local state and no
/// cross-screen store exists.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Orders,
    Stock,
    Customers,
}

impl Screen {
    /// Navigation entries in sidebar order
    pub const ALL: [Screen; 3] = [Screen::Orders, Screen::Stock, Screen::Customers];

    /// Stable key used in the URL query string and the icon set
    pub fn key(self) -> &'static str {
        match self {
            Screen::Orders => "orders",
            Screen::Stock => "stock",
            Screen::Customers => "customers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "orders" => Some(Screen::Orders),
            "stock" => Some(Screen::Stock),
            "customers" => Some(Screen::Customers),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Orders => "Coffee Orders",
            Screen::Stock => "Coffee Stock",
            Screen::Customers => "Customer Data",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub nav_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::default()),
            nav_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, screen: Screen) {
        self.active.set(screen);
    }

    /// Restore the active screen from `?active=` and keep the URL in
    /// sync afterwards, so a reload lands on the same screen. Unknown
    /// keys fall back to the default screen.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.get("active").and_then(|key| Screen::from_key(key)) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let query = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                this.active.get().key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_keys_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
        assert_eq!(Screen::from_key("payments"), None);
    }
}
