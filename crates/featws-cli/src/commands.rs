use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use featws_client::{FixtureClient, load_with_timeout};
use featws_core::detail::{DetailMessage, Effect, SheetDetail};
use featws_core::list::SheetList;
use featws_core::pagination::{PageSize, Pagination};
use featws_core::store::LoadState;
use featws_model::{RuleId, SheetId};

use crate::cli::{RulesArgs, SheetsArgs};
use crate::render::{print_rules, print_sheets};

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")
}

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let client = FixtureClient::with_delay(Duration::from_millis(args.delay_ms));
    let sheets = runtime()?
        .block_on(client.list_rule_sheets())
        .context("list rule sheets")?;
    let list = SheetList::new(sheets);
    print_sheets(&list.rows());
    Ok(())
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let sheet_id = SheetId::new(&args.sheet_id).context("sheet id")?;
    let span = info_span!("rules", sheet = %sheet_id);
    let _guard = span.enter();

    let page_size = PageSize::from_rows(args.page_size)
        .context("page size must be one of 5, 10, 25, 50 or 100")?;
    let client = FixtureClient::with_delay(Duration::from_millis(args.delay_ms));
    let runtime = runtime()?;

    let mut detail = if args.select.is_empty() {
        SheetDetail::new(sheet_id)
    } else {
        SheetDetail::for_deferral(sheet_id)
    };

    // The load round trip the view performs on mount.
    for effect in detail.update(DetailMessage::LoadRequested) {
        if let Effect::FetchSheet { sheet_id, epoch } = effect {
            let result = runtime.block_on(load_with_timeout(
                &client,
                &sheet_id,
                Duration::from_secs(args.timeout_secs),
            ));
            detail.update(DetailMessage::LoadCompleted { epoch, result });
        }
    }
    if let LoadState::Failed { reason } = detail.load_state() {
        bail!("failed to load rule sheet: {reason}");
    }

    detail.update(DetailMessage::PageSizeChanged(page_size));
    if let Some(code) = &args.code {
        detail.update(DetailMessage::CodeFilterChanged(code.clone()));
    }
    if let Some(author) = &args.author {
        detail.update(DetailMessage::AuthorFilterChanged(author.clone()));
    }
    if let Some(status) = &args.status {
        detail.update(DetailMessage::StatusFilterChanged(status.clone()));
    }
    detail.update(DetailMessage::SearchSubmitted);

    let selection: Vec<RuleId> = args
        .select
        .iter()
        .map(|code| RuleId::new(code).context("selected rule code"))
        .collect::<Result<_>>()?;
    if !selection.is_empty() {
        detail.update(DetailMessage::SelectionReplaced(selection));
    }
    debug!(
        visible = detail.rules().len(),
        selected = detail.selection().len(),
        "rendering grid"
    );

    // Client-side windowing over the filtered collection, as the grid
    // widget would do it.
    let props = detail.grid_props();
    let mut window = Pagination::new();
    window.set_page_size(props.page_size);
    window.go_to_page(args.page);
    let range = window.window(props.rows.len());

    print_rules(&detail, &props, range, args.page);
    Ok(())
}
