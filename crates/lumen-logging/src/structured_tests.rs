// ABOUTME: Tests for structured logging field validation using tracing-mock
// ABOUTME: Verifies that re-exported macros emit expected levels, messages and order

use crate::{debug, error, info, trace, warn};
use tracing_mock::{expect, subscriber};

#[test]
fn test_structured_info_logging() {
    let (subscriber, handle) = subscriber::mock()
        .event(
            expect::event()
                .at_level(tracing::Level::INFO)
                .with_fields(expect::msg("Contrast check requested")),
        )
        .only()
        .run_with_handle();

    tracing::subscriber::with_default(subscriber, || {
        info!(
            foreground = "#595959",
            background = "#FFFFFF",
            "Contrast check requested"
        );
    });

    handle.assert_finished();
}

#[test]
fn test_structured_error_logging() {
    let (subscriber, handle) = subscriber::mock()
        .event(
            expect::event()
                .at_level(tracing::Level::ERROR)
                .with_fields(expect::msg("Color rejected")),
        )
        .only()
        .run_with_handle();

    tracing::subscriber::with_default(subscriber, || {
        error!(input = "#abc", reason = "wrong length", "Color rejected");
    });

    handle.assert_finished();
}

#[test]
fn test_event_ordering() {
    let (subscriber, handle) = subscriber::mock()
        .event(expect::event().with_fields(expect::msg("First event")))
        .event(expect::event().with_fields(expect::msg("Second event")))
        .event(expect::event().with_fields(expect::msg("Third event")))
        .only()
        .run_with_handle();

    tracing::subscriber::with_default(subscriber, || {
        info!("First event");
        warn!("Second event");
        error!("Third event");
    });

    handle.assert_finished();
}

#[test]
fn test_mixed_level_events() {
    let (subscriber, handle) = subscriber::mock()
        .event(
            expect::event()
                .at_level(tracing::Level::TRACE)
                .with_fields(expect::msg("Trace message")),
        )
        .event(
            expect::event()
                .at_level(tracing::Level::DEBUG)
                .with_fields(expect::msg("Debug message")),
        )
        .only()
        .run_with_handle();

    tracing::subscriber::with_default(subscriber, || {
        trace!("Trace message");
        debug!("Debug message");
    });

    handle.assert_finished();
}
