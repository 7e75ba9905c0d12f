//! Tests for the paged list controller.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bubbletea_rs::event::BatchCmdMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn records(ids: std::ops::Range<i64>) -> Vec<Record> {
        ids.map(|n| Record::new(n).with_field("title", format!("Item {}", n)))
            .collect()
    }

    fn ids(items: &[Record]) -> Vec<i64> {
        items
            .iter()
            .map(|r| match r.id {
                ItemId::Int(n) => n,
                ItemId::Str(_) => -1,
            })
            .collect()
    }

    /// Answers calls from a queue of canned results and records the params.
    #[derive(Clone, Default)]
    struct Scripted {
        results: Arc<Mutex<VecDeque<FetchResult<Record>>>>,
        calls: Arc<Mutex<Vec<FetchParams>>>,
    }

    impl Scripted {
        fn new(results: Vec<FetchResult<Record>>) -> Self {
            Self {
                results: Arc::new(Mutex::new(results.into())),
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> Vec<FetchParams> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DataSource<Record> for Scripted {
        async fn fetch_page(&self, params: FetchParams) -> FetchResult<Record> {
            self.calls.lock().unwrap().push(params);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(None))
        }
    }

    fn page(ids: std::ops::Range<i64>, continuation: bool) -> FetchResult<Record> {
        Ok(Some(Page::new(records(ids), continuation)))
    }

    fn config() -> Config {
        Config::default()
            .with_page_size(10)
            .with_height(5)
            .with_auto_refresh(false)
    }

    fn list(source: &Scripted) -> Model<Record> {
        init_tracing();
        Model::new(source.clone(), config())
    }

    /// Runs the fetch behind `cmd` and feeds its result back. A batch is
    /// unpacked to its first command, which is the fetch.
    async fn run(list: &mut Model<Record>, cmd: Option<Cmd>) -> Option<Cmd> {
        let cmd = cmd.expect("a fetch command");
        let msg = cmd.await.expect("a fetch message");
        let msg = match msg.downcast::<BatchCmdMsg>() {
            Ok(batch) => {
                let mut cmds = batch.0;
                cmds.remove(0).await.expect("a fetch message")
            }
            Err(msg) => msg,
        };
        list.update(msg)
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    // --- refresh ---

    #[tokio::test]
    async fn test_refresh_replaces_items() {
        let source = Scripted::new(vec![page(100..110, true)]);
        let mut list = list(&source).with_initial_data(InitialData {
            items: records(0..3),
            page_index: Some(4),
            continuation: true,
        });

        let cmd = list.refresh();
        assert!(list.state().refreshing);
        assert!(!list.state().continuation);
        run(&mut list, cmd).await;

        assert_eq!(ids(list.items()), (100..110).collect::<Vec<_>>());
        assert_eq!(list.state().page_index, 0);
        assert!(!list.state().refreshing);
        assert!(list.state().continuation);
        assert_eq!(
            source.calls(),
            vec![FetchParams {
                page_index: 0,
                page_size: 10
            }]
        );
    }

    #[tokio::test]
    async fn test_refresh_starts_from_configured_page() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut list = Model::new(source.clone(), config().with_initial_page_index(1));
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        assert_eq!(source.calls()[0].page_index, 1);
        assert_eq!(list.state().page_index, 1);
    }

    #[tokio::test]
    async fn test_refresh_twice_calls_source_once() {
        let source = Scripted::new(vec![page(0..10, true), page(10..20, true)]);
        let mut list = list(&source);

        let first = list.refresh();
        assert!(first.is_some());
        assert!(list.refresh().is_none());
        run(&mut list, first).await;

        assert_eq!(source.calls().len(), 1);
        assert_eq!(list.len(), 10);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_empty_list() {
        let source = Scripted::new(vec![Err(FetchError::transport("timeout"))]);
        let errors = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&errors);
        let mut list = list(&source).on_error(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let cmd = list.refresh();
        run(&mut list, cmd).await;

        assert!(list.is_empty());
        assert!(!list.state().refreshing);
        assert!(!list.state().continuation);
        assert_eq!(list.state().phase(), Phase::Idle);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_prior_items() {
        let source = Scripted::new(vec![page(0..10, true), Err(FetchError::rejected("503"))]);
        let mut list = list(&source);
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        assert_eq!(ids(list.items()), (0..10).collect::<Vec<_>>());
        assert!(!list.state().continuation);
    }

    #[tokio::test]
    async fn test_refresh_absent_result_clears_items() {
        let source = Scripted::new(vec![page(0..10, true), Ok(None)]);
        let errors = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&errors);
        let mut list = list(&source).on_error(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        assert!(list.is_empty());
        assert!(!list.state().continuation);
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_init_refreshes_only_when_auto_refresh() {
        let source = Scripted::new(vec![page(0..10, false)]);
        let mut manual = list(&source);
        assert!(manual.init().is_none());

        let mut auto = Model::new(source.clone(), config().with_auto_refresh(true));
        let cmd = auto.init();
        assert!(auto.state().refreshing);
        run(&mut auto, cmd).await;
        assert_eq!(auto.len(), 10);
    }

    #[tokio::test]
    async fn test_init_starts_refresh_indicator() {
        let source = Scripted::new(vec![page(0..10, false)]);
        let mut list = Model::new(source, config().with_auto_refresh(true));

        let msg = list.init().expect("init command").await.expect("a batch");
        let batch = msg.downcast::<BatchCmdMsg>().expect("fetch batched with a tick");
        assert_eq!(batch.0.len(), 2);
        assert!(list.refresh_spinner.running());
    }

    #[tokio::test]
    async fn test_seeded_short_list_loads_more_on_init() {
        let source = Scripted::new(vec![page(3..13, false)]);
        let mut list = Model::new(source.clone(), config().with_height(10)).with_initial_data(
            InitialData {
                items: records(0..3),
                page_index: Some(0),
                continuation: true,
            },
        );

        let cmd = list.init();
        assert!(list.state().loading);
        assert!(list.loading_spinner.running());
        run(&mut list, cmd).await;

        assert_eq!(ids(list.items()), (0..13).collect::<Vec<_>>());
        assert_eq!(source.calls()[0].page_index, 1);
    }

    // --- load more ---

    #[tokio::test]
    async fn test_two_pages_then_exhausted() {
        let source = Scripted::new(vec![page(0..10, true), page(10..20, false)]);
        let mut list = list(&source);

        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let cmd = list.load_more();
        assert!(list.state().loading);
        run(&mut list, cmd).await;

        assert_eq!(ids(list.items()), (0..20).collect::<Vec<_>>());
        assert_eq!(list.state().page_index, 1);
        assert!(list.load_more().is_none());
        assert_eq!(source.calls().len(), 2);
        assert_eq!(source.calls()[1].page_index, 1);
    }

    #[tokio::test]
    async fn test_load_more_appends_in_fetch_order() {
        let source = Scripted::new(vec![
            page(0..10, true),
            page(10..17, true),
            page(17..30, true),
            page(30..31, false),
        ]);
        let mut list = list(&source);
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        for _ in 0..3 {
            let cmd = list.load_more();
            run(&mut list, cmd).await;
        }

        assert_eq!(ids(list.items()), (0..31).collect::<Vec<_>>());
        assert_eq!(list.state().page_index, 3);
        assert!(!list.state().continuation);
    }

    #[tokio::test]
    async fn test_load_more_noop_when_empty() {
        let source = Scripted::new(vec![]);
        let mut list = list(&source);
        list.state.continuation = true;
        assert!(list.load_more().is_none());
        assert!(!list.state().loading);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_more_noop_without_continuation() {
        let source = Scripted::new(vec![page(0..10, false)]);
        let mut list = list(&source);
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        assert!(list.load_more().is_none());
        assert!(!list.state().continuation);
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_load_more_noop_while_fetching() {
        let source = Scripted::new(vec![page(0..10, true), page(10..20, true)]);
        let mut list = list(&source).with_initial_data(InitialData {
            items: records(0..10),
            page_index: None,
            continuation: true,
        });

        let refresh = list.refresh();
        assert!(list.load_more().is_none());
        run(&mut list, refresh).await;

        let more = list.load_more();
        assert!(more.is_some());
        assert!(list.load_more().is_none());
        run(&mut list, more).await;
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_load_more_failure_keeps_items() {
        let source = Scripted::new(vec![page(0..10, true), Err(FetchError::parse("bad json"))]);
        let errors = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&errors);
        let mut list = list(&source).on_error(move |e| seen.lock().unwrap().push(e.clone()));

        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let cmd = list.load_more();
        run(&mut list, cmd).await;

        assert_eq!(list.len(), 10);
        assert!(!list.state().loading);
        assert!(!list.state().continuation);
        assert_eq!(list.state().page_index, 0);
        assert_eq!(*errors.lock().unwrap(), vec![FetchError::parse("bad json")]);
        assert!(list.load_more().is_none());
    }

    #[tokio::test]
    async fn test_load_more_absent_result_stops_continuation() {
        let source = Scripted::new(vec![page(0..10, true), Ok(None)]);
        let errors = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&errors);
        let mut list = list(&source).on_error(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let cmd = list.load_more();
        run(&mut list, cmd).await;

        assert_eq!(list.len(), 10);
        assert!(!list.state().continuation);
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refresh_supersedes_load_more() {
        let source = Scripted::new(vec![page(10..20, true), page(100..110, true)]);
        let mut list = list(&source).with_initial_data(InitialData {
            items: records(0..10),
            page_index: Some(0),
            continuation: true,
        });

        let more = list.load_more();
        let refresh = list.refresh();
        assert!(!list.state().loading);
        assert!(list.state().refreshing);

        run(&mut list, more).await;
        assert_eq!(ids(list.items()), (0..10).collect::<Vec<_>>());
        assert!(list.state().refreshing);

        run(&mut list, refresh).await;
        assert_eq!(ids(list.items()), (100..110).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_refresh_same_length_rearms_load_more() {
        let source = Scripted::new(vec![page(0..3, false), page(10..13, true)]);
        let mut list = Model::new(source.clone(), config().with_height(10));

        let cmd = list.refresh();
        assert!(run(&mut list, cmd).await.is_none());
        assert!(!list.state().loading);

        // Same number of rows, but now the source has more.
        let cmd = list.refresh();
        let follow_up = run(&mut list, cmd).await;
        assert!(follow_up.is_some());
        assert!(list.state().loading);
        assert!(list.state().continuation);
    }

    // --- stop refresh ---

    #[tokio::test]
    async fn test_stop_refresh_then_late_completion() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut list = list(&source);

        let cmd = list.refresh();
        list.stop_refresh();
        assert!(!list.state().refreshing);
        assert_eq!(list.state().phase(), Phase::Idle);

        run(&mut list, cmd).await;
        assert!(!list.state().refreshing);
        assert_eq!(list.len(), 10);
    }

    #[tokio::test]
    async fn test_stale_refresh_dropped_after_new_one() {
        // Futures run in await order: the stale fetch takes the first page.
        let source = Scripted::new(vec![page(0..10, true), page(50..55, false)]);
        let mut list = list(&source);

        let old = list.refresh();
        list.stop_refresh();
        let new = list.refresh();
        assert!(new.is_some());

        run(&mut list, old).await;
        assert!(list.is_empty());
        assert!(list.state().refreshing);

        run(&mut list, new).await;
        assert_eq!(ids(list.items()), (50..55).collect::<Vec<_>>());
        assert!(!list.state().refreshing);
    }

    // --- selection ---

    #[tokio::test]
    async fn test_press_same_item_twice_toggles_off() {
        let source = Scripted::new(vec![]);
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        let mut list = Model::new(source, config().with_single_select(true))
            .with_initial_data(InitialData {
                items: records(0..10),
                ..Default::default()
            })
            .on_selection_change(move |item: Option<&Record>| {
                seen.lock().unwrap().push(item.map(|r| r.id.clone()));
            });

        list.press(3);
        assert_eq!(list.state().selected_id, Some(ItemId::Int(3)));
        list.press(3);
        assert_eq!(list.state().selected_id, None);
        assert_eq!(*changes.lock().unwrap(), vec![Some(ItemId::Int(3)), None]);
    }

    #[tokio::test]
    async fn test_press_moves_selection_then_toggles_off() {
        let source = Scripted::new(vec![]);
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        let mut list = Model::new(source, config().with_single_select(true))
            .with_initial_data(InitialData {
                items: records(0..10),
                ..Default::default()
            })
            .on_selection_change(move |item: Option<&Record>| {
                seen.lock().unwrap().push(item.map(|r| r.id.clone()));
            });

        list.press(5);
        list.press(7);
        list.press(5);
        assert_eq!(
            *changes.lock().unwrap(),
            vec![Some(ItemId::Int(5)), Some(ItemId::Int(7)), Some(ItemId::Int(5))]
        );

        list.press(5);
        assert_eq!(changes.lock().unwrap().last(), Some(&None));
    }

    #[tokio::test]
    async fn test_press_observer_runs_before_selection() {
        let source = Scripted::new(vec![]);
        let log = Arc::new(Mutex::new(Vec::new()));
        let pressed = Arc::clone(&log);
        let changed = Arc::clone(&log);
        let mut list = Model::new(source, config().with_single_select(true))
            .with_initial_data(InitialData {
                items: records(0..3),
                ..Default::default()
            })
            .on_item_press(move |item: &Record, index| {
                pressed.lock().unwrap().push(format!("press {} at {}", item.id, index));
            })
            .on_selection_change(move |item: Option<&Record>| {
                changed.lock().unwrap().push(format!("select {:?}", item.map(|r| r.id.to_string())));
            });

        list.press(2);
        list.press(9);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["press 2 at 2".to_string(), "select Some(\"2\")".to_string()]
        );
    }

    #[tokio::test]
    async fn test_press_without_single_select_leaves_selection() {
        let source = Scripted::new(vec![]);
        let presses = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&presses);
        let mut list = list(&source)
            .with_initial_data(InitialData {
                items: records(0..3),
                ..Default::default()
            })
            .on_item_press(move |_: &Record, _| {
                seen.fetch_add(1, Ordering::SeqCst);
            });

        list.press(1);
        assert_eq!(presses.load(Ordering::SeqCst), 1);
        assert_eq!(list.state().selected_id, None);
    }

    #[tokio::test]
    async fn test_toggle_at_is_independent_of_selection() {
        let source = Scripted::new(vec![]);
        let mut list = Model::new(source, config().with_single_select(true)).with_initial_data(
            InitialData {
                items: records(0..3),
                ..Default::default()
            },
        );

        list.press(0);
        list.toggle_at(2);
        assert!(list.items()[2].selected());
        assert_eq!(list.state().selected_id, Some(ItemId::Int(0)));

        list.toggle_at(2);
        assert!(!list.items()[2].selected());
        list.toggle_at(42);
        assert_eq!(list.len(), 3);
    }

    #[tokio::test]
    async fn test_clear_selection_keeps_marks() {
        let source = Scripted::new(vec![]);
        let mut list = Model::new(source, config().with_single_select(true)).with_initial_data(
            InitialData {
                items: records(0..3),
                ..Default::default()
            },
        );
        list.toggle_at(1);
        list.press(1);
        list.clear_selection();

        assert_eq!(list.state().selected_id, None);
        assert!(list.items()[1].selected());
    }

    #[tokio::test]
    async fn test_refresh_drops_vanished_selection() {
        let source = Scripted::new(vec![page(0..10, true), page(0..5, true), page(20..25, false)]);
        let mut list = Model::new(source.clone(), config().with_single_select(true));
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        list.press(3);
        let cmd = list.refresh();
        run(&mut list, cmd).await;
        assert_eq!(list.state().selected_id, Some(ItemId::Int(3)));

        let cmd = list.refresh();
        run(&mut list, cmd).await;
        assert_eq!(list.state().selected_id, None);
        assert!(list.state().selection_is_live());
    }

    #[tokio::test]
    async fn test_refresh_notifies_when_selection_vanishes() {
        let source = Scripted::new(vec![page(10..13, false)]);
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        let mut list = Model::new(source, config().with_single_select(true))
            .with_initial_data(InitialData {
                items: records(0..3),
                ..Default::default()
            })
            .on_selection_change(move |item: Option<&Record>| {
                seen.lock().unwrap().push(item.map(|r| r.id.clone()));
            });

        list.press(1);
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        assert_eq!(list.state().selected_id, None);
        assert_eq!(*changes.lock().unwrap(), vec![Some(ItemId::Int(1)), None]);
    }

    // --- projection ---

    #[tokio::test]
    async fn test_view_model_flags() {
        let source = Scripted::new(vec![page(0..10, true), page(10..20, true)]);
        let mut list = list(&source);
        assert!(list.view_model().show_empty);

        let cmd = list.refresh();
        let vm = list.view_model();
        assert!(!vm.show_empty);
        assert!(vm.refreshing);
        run(&mut list, cmd).await;

        let _more = list.load_more();
        let vm = list.view_model();
        assert!(vm.show_loading_footer);
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.rows[4].index, 4);
        assert_eq!(list.view_model(), vm);
    }

    #[tokio::test]
    async fn test_view_model_selected_follows_mode() {
        let source = Scripted::new(vec![]);
        let data = InitialData {
            items: records(0..3),
            ..Default::default()
        };

        let mut marks = Model::new(source.clone(), config()).with_initial_data(data.clone());
        marks.toggle_at(1);
        let selected: Vec<bool> = marks.view_model().rows.iter().map(|r| r.selected).collect();
        assert_eq!(selected, vec![false, true, false]);

        let mut single =
            Model::new(source, config().with_single_select(true)).with_initial_data(data);
        single.toggle_at(1);
        single.press(2);
        let selected: Vec<bool> = single.view_model().rows.iter().map(|r| r.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
    }

    #[tokio::test]
    async fn test_empty_placeholder_can_be_hidden() {
        let source = Scripted::new(vec![]);
        let list = Model::<Record>::new(source, config().with_show_empty(false));
        assert!(!list.view_model().show_empty);
    }

    // --- rendering ---

    #[tokio::test]
    async fn test_custom_empty_view_replaces_text() {
        let source = Scripted::new(vec![page(0..3, false)]);
        let mut list = list(&source).with_empty_view(|| "Nothing here yet".to_string());

        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("Nothing here yet"));
        assert!(!plain.contains("No data available"));

        let cmd = list.refresh();
        run(&mut list, cmd).await;
        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(!plain.contains("Nothing here yet"));
        assert!(plain.contains("Item 0"));
    }

    #[tokio::test]
    async fn test_view_renders_rows_and_indicators() {
        let source = Scripted::new(vec![page(0..10, true), page(10..20, false)]);
        let mut list = list(&source).with_header("Inbox");

        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("Inbox"));
        assert!(plain.contains("No data available"));

        let cmd = list.refresh();
        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("Refreshing"));
        assert!(!plain.contains("No data available"));
        run(&mut list, cmd).await;

        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("Item 0"));
        assert!(plain.contains("Item 4"));
        assert!(!plain.contains("Item 5"));
        assert!(plain.contains("1/10 items (more)"));

        let _more = list.load_more();
        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("Loading"));
    }

    #[tokio::test]
    async fn test_custom_delegate_receives_resolved_selection() {
        let source = Scripted::new(vec![]);
        let mut list = Model::new(source, config().with_single_select(true))
            .with_initial_data(InitialData {
                items: records(0..3),
                ..Default::default()
            })
            .with_delegate(|item: &Record, index: usize, selected: bool| {
                format!("[{}] #{} {}", if selected { "x" } else { " " }, index, item.id)
            });
        list.press(1);

        let plain = strip_ansi_escapes::strip_str(list.view());
        assert!(plain.contains("[ ] #0 0"));
        assert!(plain.contains("[x] #1 1"));
    }

    // --- keys ---

    #[tokio::test]
    async fn test_refresh_key_respects_refresh_disabled() {
        let source = Scripted::new(vec![page(0..10, false)]);
        let mut list = Model::new(source.clone(), config().with_refresh_disabled(true));
        assert!(list.update(key(KeyCode::Char('r'))).is_none());
        assert!(!list.state().refreshing);

        let mut enabled = Model::new(source, config());
        assert!(enabled.update(key(KeyCode::Char('r'))).is_some());
        assert!(enabled.state().refreshing);
    }

    #[tokio::test]
    async fn test_enter_presses_row_under_cursor() {
        let source = Scripted::new(vec![]);
        let mut list = Model::new(source, config().with_single_select(true)).with_initial_data(
            InitialData {
                items: records(0..10),
                ..Default::default()
            },
        );
        list.update(key(KeyCode::Down));
        list.update(key(KeyCode::Down));
        list.update(key(KeyCode::Enter));
        assert_eq!(list.state().selected_id, Some(ItemId::Int(2)));

        list.update(key(KeyCode::Char(' ')));
        assert!(list.items()[2].selected());
    }

    #[tokio::test]
    async fn test_scrolling_near_end_loads_more() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut list = list(&source);
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        // Height 5, threshold half a window: the sixth row still leaves four
        // rows below the window, the seventh leaves three.
        for _ in 0..5 {
            list.update(key(KeyCode::Down));
        }
        assert!(!list.state().loading);
        assert!(list.update(key(KeyCode::Down)).is_some());
        assert!(list.state().loading);
        assert_eq!(list.list_view().offset(), 2);

        list.update(key(KeyCode::Home));
        assert_eq!(list.list_view().offset(), 0);
    }

    // --- handle ---

    #[tokio::test]
    async fn test_handle_commands_apply_through_update() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut list = list(&source);
        let cmd = list.refresh();
        run(&mut list, cmd).await;

        let handle = list.handle();
        assert_eq!(handle.list_id(), list.handle().list_id());
        handle.change_item_select(4).unwrap();
        let msg = list.listen().await.expect("command message");
        let next = list.update(msg);
        assert!(next.is_some());
        assert!(list.items()[4].selected());
        assert!(handle.get_items()[4].selected());
    }

    #[tokio::test]
    async fn test_handle_refresh_and_stop() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut list = list(&source);
        let handle = list.handle();

        handle.refresh().unwrap();
        handle.stop_refresh().unwrap();

        let msg = list.listen().await.expect("refresh command");
        list.update(msg);
        assert!(list.state().refreshing);
        assert_eq!(handle.snapshot().phase, Phase::Refreshing);

        let msg = list.listen().await.expect("stop command");
        list.update(msg);
        assert!(!list.state().refreshing);
        assert_eq!(handle.snapshot().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_handle_get_items_is_a_copy() {
        let source = Scripted::new(vec![page(0..3, false)]);
        let mut list = list(&source);
        let mut handle = list.handle();
        let cmd = list.apply(Command::Refresh);
        run(&mut list, cmd).await;

        let snapshot = handle.changed().await.unwrap();
        assert_eq!(snapshot.items.len(), 3);

        let mut copy = handle.get_items();
        copy.clear();
        copy.push(Record::new("intruder"));
        assert_eq!(ids(list.items()), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_handle_scroll_and_clear_selection() {
        let source = Scripted::new(vec![]);
        let mut list = Model::new(source, config().with_single_select(true)).with_initial_data(
            InitialData {
                items: records(0..20),
                ..Default::default()
            },
        );
        list.press(1);
        for _ in 0..8 {
            list.update(key(KeyCode::Down));
        }
        assert_ne!(list.list_view().offset(), 0);

        let handle = list.handle();
        handle.scroll_to_top().unwrap();
        handle.clear_selection().unwrap();
        for _ in 0..2 {
            let msg = list.listen().await.expect("command message");
            list.update(msg);
        }
        assert_eq!(list.list_view().offset(), 0);
        assert_eq!(list.state().selected_id, None);
        assert_eq!(handle.snapshot().selected_id, None);
    }

    #[tokio::test]
    async fn test_snapshots_published_only_with_a_handle() {
        let source = Scripted::new(vec![]);
        let mut list = list(&source).with_initial_data(InitialData {
            items: records(0..3),
            ..Default::default()
        });
        list.toggle_at(2);
        assert!(list.snapshot_tx.borrow().items.is_empty());

        let handle = list.handle();
        assert_eq!(handle.get_items().len(), 3);
        assert!(handle.get_items()[2].selected());

        list.toggle_at(0);
        assert!(handle.snapshot().items[0].selected());
    }

    #[tokio::test]
    async fn test_handle_reports_closed_list() {
        let source = Scripted::new(vec![]);
        let list = list(&source);
        let mut handle = list.handle();
        drop(list);

        assert_eq!(handle.refresh(), Err(HandleError::Closed));
        assert_eq!(handle.changed().await.unwrap_err(), HandleError::Closed);
    }

    #[tokio::test]
    async fn test_messages_for_other_lists_are_ignored() {
        let source = Scripted::new(vec![page(0..10, true)]);
        let mut a = list(&source);
        let mut b = list(&source);

        let cmd = a.refresh().unwrap();
        let msg = cmd.await.unwrap();
        assert!(b.update(msg).is_none());
        assert!(b.is_empty());
        assert!(a.state().refreshing);
    }
}
