use std::path::PathBuf;

use anyhow::Context;
use folio_page::{ArchivePage, DocumentOptions, FeatherIcons, Location, ScriptRevealer, SiteLayout};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub output: PathBuf,
    pub entries: usize,
    pub described: usize,
    pub reveal_calls: usize,
    pub interactive: bool,
    pub bytes: usize,
}

/// Handle `folio build`.
pub fn handle(args: &BuildArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    if !flags.quiet {
        output(&response, flags)?;
    }
    Ok(())
}

pub fn run(args: &BuildArgs, ctx: &AppContext) -> anyhow::Result<BuildResponse> {
    let config = &ctx.config;
    let entries = ctx.load_entries()?;

    let mut page = ArchivePage::mount(Location::new(args.location.clone()), &entries)
        .with_site(config.site.clone())
        .with_reveal(config.reveal.clone());

    // A document without client script has nowhere to run reveals.
    let interactive = config.output.client_script && !args.no_script;
    let reduced_motion = args.reduced_motion || config.motion.prefers_reduced_motion;
    let mut revealer = ScriptRevealer::new();
    let reveal_calls = if interactive {
        page.commit(&reduced_motion, &mut revealer)
    } else {
        0
    };

    let options = DocumentOptions {
        interactive,
        reveal_script: revealer.render_script()?,
    };

    let layout = SiteLayout::new(config.site.clone());
    let document = page.render_document(&layout, &FeatherIcons, &options);

    let target = ctx.resolve(args.out.as_deref().unwrap_or(&config.output.path));
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&target, &document)
        .with_context(|| format!("failed to write {}", target.display()))?;

    tracing::info!(output = %target.display(), entries = entries.len(), "build: page written");

    Ok(BuildResponse {
        output: target,
        entries: entries.len(),
        described: entries.iter().filter(|e| e.description.is_some()).count(),
        reveal_calls,
        interactive,
        bytes: document.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::fixture;
    use pretty_assertions::assert_eq;

    fn args() -> BuildArgs {
        BuildArgs {
            out: None,
            reduced_motion: false,
            no_script: false,
            location: "/archive".into(),
        }
    }

    #[test]
    fn writes_document_to_configured_path() {
        let (dir, ctx) = fixture();
        let response = run(&args(), &ctx).unwrap();

        assert_eq!(response.output, dir.path().join("public/archive/index.html"));
        assert_eq!(response.entries, 2);
        assert_eq!(response.described, 1);
        assert_eq!(response.reveal_calls, 4);
        assert!(response.interactive);

        let html = std::fs::read_to_string(&response.output).unwrap();
        assert!(html.contains("Example Cert"));
        assert!(!html.contains("Portfolio"));
        assert!(html.find("Example Cert").unwrap() < html.find("Solo Cert").unwrap());
        assert_eq!(html.matches("sr.reveal(").count(), 4);
    }

    #[test]
    fn reduced_motion_and_no_script_give_a_static_page() {
        let (dir, ctx) = fixture();
        let mut args = args();
        args.reduced_motion = true;
        args.no_script = true;
        args.out = Some("dist/static.html".into());

        let response = run(&args, &ctx).unwrap();
        assert_eq!(response.output, dir.path().join("dist/static.html"));
        assert_eq!(response.reveal_calls, 0);
        assert!(!response.interactive);

        let html = std::fs::read_to_string(&response.output).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn no_script_reports_no_reveals() {
        let (_dir, ctx) = fixture();
        let mut args = args();
        args.no_script = true;

        let response = run(&args, &ctx).unwrap();
        assert_eq!(response.reveal_calls, 0);
        assert!(!response.interactive);

        let html = std::fs::read_to_string(&response.output).unwrap();
        assert!(!html.contains("sr.reveal("));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn configured_reduced_motion_suppresses_reveals() {
        let (_dir, mut ctx) = fixture();
        ctx.config.motion.prefers_reduced_motion = true;
        let response = run(&args(), &ctx).unwrap();
        assert_eq!(response.reveal_calls, 0);

        let html = std::fs::read_to_string(&response.output).unwrap();
        assert!(!html.contains("sr.reveal("));
        assert!(html.contains("addEventListener('click'"));
    }

    #[test]
    fn missing_content_root_fails_with_context() {
        let (_dir, mut ctx) = fixture();
        ctx.config.content.root = "nowhere".into();
        let err = run(&args(), &ctx).unwrap_err();
        assert!(format!("{err:#}").contains("content root not found"));
    }
}
