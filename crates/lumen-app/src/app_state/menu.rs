//! Native application menu built from the platform menu template.

use muda::accelerator::Accelerator;
use muda::{Menu, MenuEvent, MenuItem, Submenu};
use winit::window::Window;

use lumen_common::{Action, PlatformError};
use lumen_platform::MenuTemplate;

use super::core::ShellApp;

fn menu_err(e: muda::Error) -> PlatformError {
    PlatformError::MenuError(e.to_string())
}

/// Parse an accelerator string, dropping it with a warning if muda rejects it.
pub(super) fn parse_accelerator(accel: &str) -> Option<Accelerator> {
    match accel.parse::<Accelerator>() {
        Ok(a) => Some(a),
        Err(e) => {
            tracing::warn!("menu accelerator '{accel}' rejected: {e}");
            None
        }
    }
}

/// Build the native menu. Item ids are the action menu ids.
pub(super) fn build_menu(template: &MenuTemplate) -> Result<Menu, PlatformError> {
    let menu = Menu::new();
    for group in &template.groups {
        let submenu = Submenu::new(group.label, true);
        for entry in &group.entries {
            let accelerator = entry.accelerator.as_deref().and_then(parse_accelerator);
            let item = MenuItem::with_id(entry.action.menu_id(), entry.label, true, accelerator);
            submenu.append(&item).map_err(menu_err)?;
        }
        menu.append(&submenu).map_err(menu_err)?;
    }
    Ok(menu)
}

/// Attach the menu to the application (macOS) or the window (Windows).
///
/// winit windows are not GTK windows, so Linux gets no menu bar. There, and
/// on Windows where accelerators are not translated, F12 and Ctrl+Q come
/// through the keybind registry: from winit while the window has focus and
/// from the page bridge while the webview has it.
pub(super) fn install(menu: &Menu, window: &Window) -> Result<(), PlatformError> {
    #[cfg(target_os = "macos")]
    {
        let _ = window;
        menu.init_for_nsapp();
    }

    #[cfg(target_os = "windows")]
    {
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
        let handle = window
            .window_handle()
            .map_err(|e| PlatformError::MenuError(e.to_string()))?;
        if let RawWindowHandle::Win32(h) = handle.as_raw() {
            unsafe { menu.init_for_hwnd(h.hwnd.get()) }.map_err(menu_err)?;
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let _ = (menu, window);
        tracing::info!("Native menu bar unavailable; menu actions stay on their keybinds");
    }

    Ok(())
}

impl ShellApp {
    /// Drain native menu activations and dispatch their actions.
    pub(super) fn poll_menu_events(&mut self) {
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            match Action::from_menu_id(&event.id.0) {
                Some(action) => {
                    tracing::debug!(id = %event.id.0, ?action, "menu item activated");
                    self.dispatch(action);
                }
                None => tracing::debug!(id = %event.id.0, "unknown menu id"),
            }
        }
    }
}
