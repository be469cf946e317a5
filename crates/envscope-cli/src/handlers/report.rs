//! Report command handler.
//!
//! Declares the requested slots on a fresh in-memory surface, runs every
//! probe once and prints the surface.

use std::sync::Arc;

use envscope_core::{EnvironmentReporter, MemorySurface, ReportSummary, SlotKey};

use crate::bootstrap::CliContext;
use crate::commands::{OutputFormat, ReportArgs};
use crate::error::CliError;
use crate::presentation::{render_html, render_json, render_table};

/// Run the reporter against a surface declaring `slots` (every slot when
/// empty).
pub async fn collect(
    ctx: &CliContext,
    slots: &[SlotKey],
    placeholder: &str,
) -> (Arc<MemorySurface>, ReportSummary) {
    let surface = Arc::new(if slots.is_empty() {
        MemorySurface::with_all_slots(placeholder)
    } else {
        MemorySurface::with_slots(slots.iter().copied(), placeholder)
    });

    let reporter = EnvironmentReporter::new(ctx.env.clone(), ctx.lookup.clone(), surface.clone());
    let summary = reporter.run().await;
    (surface, summary)
}

/// Render a finished surface in the requested format.
pub fn render(
    surface: &MemorySurface,
    summary: ReportSummary,
    format: OutputFormat,
) -> Result<String, CliError> {
    let slots = surface.snapshot();
    Ok(match format {
        OutputFormat::Table => render_table(&slots),
        OutputFormat::Json => render_json(&slots, summary)? + "\n",
        OutputFormat::Html => render_html(&slots),
    })
}

/// Execute the report command.
pub async fn execute(ctx: &CliContext, args: &ReportArgs) -> Result<(), CliError> {
    let (surface, summary) = collect(ctx, &args.slots, &args.placeholder).await;
    print!("{}", render(&surface, summary, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use envscope_core::testing::FakeEnvironment;
    use envscope_core::{
        GeoLookupError, GeoLookupPort, GeoLookupResult, GeoRecord, Presentation,
    };

    struct OfflineLookup;

    #[async_trait]
    impl GeoLookupPort for OfflineLookup {
        async fn lookup(&self) -> GeoLookupResult<GeoRecord> {
            Err(GeoLookupError::Network {
                message: "offline".to_string(),
            })
        }
    }

    fn context() -> CliContext {
        CliContext {
            env: Arc::new(FakeEnvironment::desktop_chrome()),
            lookup: Arc::new(OfflineLookup),
        }
    }

    #[tokio::test]
    async fn test_collect_all_slots() {
        let (surface, summary) = collect(&context(), &[], "取得中...").await;

        assert_eq!(summary.skipped, 0);
        assert_eq!(surface.text(SlotKey::BrowserName).as_deref(), Some("Chrome"));
        let ip = surface.get(SlotKey::IpAddress).unwrap();
        assert_eq!(ip.content.as_str(), "取得失敗");
        assert_eq!(ip.presentation, Some(Presentation::Error));
        // Location slots other than the IP keep their placeholder.
        assert_eq!(surface.text(SlotKey::City).as_deref(), Some("取得中..."));
    }

    #[tokio::test]
    async fn test_collect_restricted_slots() {
        let (surface, summary) =
            collect(&context(), &[SlotKey::UserAgent, SlotKey::Rtt], "-").await;

        assert_eq!(summary.written, 2);
        assert!(summary.skipped > 0);
        assert_eq!(surface.snapshot().len(), 2);
        assert!(surface.get(SlotKey::BrowserName).is_none());
    }

    #[tokio::test]
    async fn test_render_formats() {
        let (surface, summary) = collect(&context(), &[SlotKey::Language], "-").await;

        let table = render(&surface, summary, OutputFormat::Table).unwrap();
        assert_eq!(table, "language  ja-JP\n");

        let json = render(&surface, summary, OutputFormat::Json).unwrap();
        assert!(json.contains("\"language\""));
        assert!(json.ends_with('\n'));

        let html = render(&surface, summary, OutputFormat::Html).unwrap();
        assert!(html.contains("<dd id=\"language\">ja-JP</dd>"));
    }
}
