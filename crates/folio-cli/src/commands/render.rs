use anyhow::Context;
use folio_core::{Entry, EntryId};
use folio_page::{ArchivePage, FeatherIcons, Location};

use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;

/// Handle `folio render`.
pub fn handle(args: &RenderArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let entries = ctx.load_entries()?;
    print!("{}", render(args, ctx, &entries)?);
    Ok(())
}

pub fn render(args: &RenderArgs, ctx: &AppContext, entries: &[Entry]) -> anyhow::Result<String> {
    let mut page = ArchivePage::mount(Location::new(args.location.clone()), entries)
        .with_site(ctx.config.site.clone());

    for id in &args.expand {
        let id = EntryId::from(id.as_str());
        page.toggle(&id)
            .with_context(|| format!("cannot expand '{id}'"))?;
    }

    Ok(page.render_main(&FeatherIcons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::fixture;

    fn args(expand: &[&str]) -> RenderArgs {
        RenderArgs {
            expand: expand.iter().map(ToString::to_string).collect(),
            location: "/archive".into(),
        }
    }

    #[test]
    fn collapsed_render_has_no_description_rows() {
        let (_dir, ctx) = fixture();
        let entries = ctx.load_entries().unwrap();
        let html = render(&args(&[]), &ctx, &entries).unwrap();

        assert!(html.starts_with("  <main>"));
        assert!(!html.contains("description-row"));
    }

    #[test]
    fn expanded_row_gets_its_description() {
        let (_dir, ctx) = fixture();
        let entries = ctx.load_entries().unwrap();
        let html = render(&args(&["2023-01-15-example-cert"]), &ctx, &entries).unwrap();

        assert_eq!(html.matches("description-row").count(), 1);
        assert!(html.contains("<p>A proctored exam.</p>"));
    }

    #[test]
    fn expanding_twice_collapses_again() {
        let (_dir, ctx) = fixture();
        let entries = ctx.load_entries().unwrap();
        let id = "2023-01-15-example-cert";
        let html = render(&args(&[id, id]), &ctx, &entries).unwrap();

        assert!(!html.contains("description-row"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let (_dir, ctx) = fixture();
        let entries = ctx.load_entries().unwrap();
        let err = render(&args(&["missing"]), &ctx, &entries).unwrap_err();

        assert!(format!("{err:#}").contains("cannot expand 'missing'"));
    }
}
