//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use lumen_platform::{normalize_winit_key, KeyCombo};

use super::core::ShellApp;
use super::init::create_or_log;

/// Key name as `normalize_winit_key` expects it, or `None` for dead keys.
pub(super) fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.init_attempted {
            return;
        }
        self.init_attempted = true;

        if create_or_log(self.initialize_window(event_loop)).is_none() {
            tracing::warn!("Continuing without a window");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.should_exit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
                if self.should_exit {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }

        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }

        self.poll_and_schedule(event_loop);
    }
}

impl ShellApp {
    /// Resolve a key press against the keybind registry and dispatch it.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        let Some(name) = key_name(&event.logical_key) else {
            return;
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&name),
        );
        self.dispatch_combo(&combo);
    }

    /// Dispatch the action bound to `combo`, if any.
    ///
    /// Shared by window key events and key presses forwarded by the page.
    pub(super) fn dispatch_combo(&mut self, combo: &KeyCombo) -> bool {
        match self.registry.lookup(combo) {
            Some(action) => {
                tracing::debug!(?action, key = %combo.key, "keybind matched");
                self.dispatch(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_common::Action;
    use winit::keyboard::{ModifiersState, NamedKey, SmolStr};

    use crate::app_state::core::test_support::app;

    fn combo_for(app: &crate::app_state::ShellApp, key: &Key) -> KeyCombo {
        KeyCombo::from_winit(
            app.modifiers.control_key(),
            app.modifiers.alt_key(),
            app.modifiers.shift_key(),
            app.modifiers.super_key(),
            normalize_winit_key(&key_name(key).unwrap()),
        )
    }

    #[test]
    fn named_keys_use_debug_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::F12)).as_deref(), Some("F12"));
    }

    #[test]
    fn character_keys_pass_through() {
        assert_eq!(
            key_name(&Key::Character(SmolStr::new("q"))).as_deref(),
            Some("q")
        );
    }

    #[test]
    fn f12_resolves_to_devtools() {
        let app = app();
        let combo = combo_for(&app, &Key::Named(NamedKey::F12));
        assert_eq!(app.registry.lookup(&combo), Some(Action::OpenDevtools));
    }

    #[test]
    fn platform_quit_chord_resolves_to_quit() {
        let mut app = app();
        app.modifiers = if cfg!(target_os = "macos") {
            ModifiersState::SUPER
        } else {
            ModifiersState::CONTROL
        };
        let combo = combo_for(&app, &Key::Character(SmolStr::new("q")));
        assert_eq!(app.registry.lookup(&combo), Some(Action::Quit));
    }

    #[test]
    fn bare_q_does_nothing() {
        let app = app();
        let combo = combo_for(&app, &Key::Character(SmolStr::new("q")));
        assert_eq!(app.registry.lookup(&combo), None);
    }

    #[test]
    fn dispatch_combo_runs_bound_action() {
        let mut app = app();
        app.modifiers = if cfg!(target_os = "macos") {
            ModifiersState::SUPER
        } else {
            ModifiersState::CONTROL
        };
        let combo = combo_for(&app, &Key::Character(SmolStr::new("q")));
        assert!(app.dispatch_combo(&combo));
        assert!(app.should_exit);
    }

    #[test]
    fn dispatch_combo_ignores_unbound_keys() {
        let mut app = app();
        let combo = combo_for(&app, &Key::Named(NamedKey::Escape));
        assert!(!app.dispatch_combo(&combo));
        assert!(!app.should_exit);
    }
}
