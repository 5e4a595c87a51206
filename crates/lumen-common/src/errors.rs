use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("keybind error: {0}")]
    KeybindError(String),

    #[error("menu error: {0}")]
    MenuError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 10".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 10");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::KeybindError("empty keybind string".into());
        assert_eq!(err.to_string(), "keybind error: empty keybind string");

        let err = PlatformError::MenuError("accelerator rejected".into());
        assert_eq!(err.to_string(), "menu error: accelerator rejected");
    }

    #[test]
    fn lumen_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: LumenError = config_err.into();
        assert!(matches!(err, LumenError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn lumen_error_from_platform() {
        let platform_err = PlatformError::MenuError("no window".into());
        let err: LumenError = platform_err.into();
        assert!(matches!(err, LumenError::Platform(_)));
        assert!(err.to_string().contains("no window"));
    }

    #[test]
    fn lumen_error_runtime_variants() {
        let err = LumenError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = LumenError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");
    }
}
