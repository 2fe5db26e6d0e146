use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `-v` 時也顯示 WebSocket 交握與 frame 的細節
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "zugzwang=debug,tokio_tungstenite=debug,tungstenite=debug,info"
    } else {
        "zugzwang=info,warn"
    }
}

/// `RUST_LOG` takes precedence over `-v`.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_includes_socket_crates() {
        let filter = default_filter(true);
        assert!(filter.contains("zugzwang=debug"));
        assert!(filter.contains("tokio_tungstenite=debug"));
        assert!(filter.contains("tungstenite=debug"));
        assert!(!default_filter(false).contains("tungstenite"));
    }

    #[test]
    fn test_default_filters_parse() {
        for verbose in [true, false] {
            let filter = EnvFilter::try_new(default_filter(verbose));
            assert!(filter.is_ok(), "{} should parse", default_filter(verbose));
        }
    }
}
