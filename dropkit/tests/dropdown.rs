use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use dropkit::widgets::dropdown::{
    Dropdown, DropdownConfig, DropdownOption, LabelMatcher, ListRow, OptionGroup, OptionValue,
    PanelBody, SelectionValue, filter_options, matching_indices, random_selection,
    resolve_options,
};
use dropkit::widget::Callback;
use dropkit::{EventResult, Key, Modifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

type Calls<T> = Rc<RefCell<Vec<T>>>;

fn recorder<T: 'static>() -> (Calls<T>, Callback<T>) {
    let calls: Calls<T> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, Box::new(move |value| sink.borrow_mut().push(value)))
}

fn fruits(labels: &[&str]) -> Vec<DropdownOption> {
    labels
        .iter()
        .map(|label| DropdownOption::new(*label, label.to_lowercase()))
        .collect()
}

fn text(value: &str) -> OptionValue {
    OptionValue::from(value)
}

fn multi(values: &[&str]) -> SelectionValue {
    SelectionValue::Multiple(values.iter().map(|v| text(v)).collect())
}

fn dropdown(config: DropdownConfig) -> (Dropdown, Calls<SelectionValue>) {
    let (calls, on_change) = recorder();
    (Dropdown::new(config, on_change), calls)
}

/// Feed the last reported value back, as a controlling parent would.
fn sync(dd: &mut Dropdown, calls: &Calls<SelectionValue>) {
    if let Some(last) = calls.borrow().last() {
        dd.set_value(last.clone());
    }
}

fn key(dd: &mut Dropdown, key: Key) -> EventResult {
    dd.handle_key(key, Modifiers::NONE)
}

fn option_part(dd: &Dropdown, index: usize) -> String {
    dd.id().part(format!("opt-{}", index))
}

// =============================================================================
// Options Resolver
// =============================================================================

#[test]
fn test_resolve_flat_options() {
    let options = fruits(&["Apple", "Banana"]);
    let resolved = resolve_options(&options, &[]);
    assert_eq!(resolved.options, options);
    assert!(!resolved.is_grouped());
}

#[test]
fn test_resolve_groups_concatenates_in_order() {
    let groups = vec![
        OptionGroup::new("Fruit", "fruit", fruits(&["Apple", "Banana"])),
        OptionGroup::new("Veg", "veg", fruits(&["Carrot"])),
    ];
    let ignored = fruits(&["Ignored"]);
    let resolved = resolve_options(&ignored, &groups);

    let labels: Vec<&str> = resolved.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Apple", "Banana", "Carrot"]);
    assert_eq!(resolved.groups[0].range, 0..2);
    assert_eq!(resolved.groups[1].range, 2..3);
    assert_eq!(resolved.group_of(2).map(|g| g.label.as_str()), Some("Veg"));
}

#[test]
fn test_resolve_empty_inputs() {
    let resolved = resolve_options(&[], &[]);
    assert!(resolved.options.is_empty());
}

#[test]
fn test_duplicate_values_reported() {
    let options = vec![
        DropdownOption::new("A", "x"),
        DropdownOption::new("B", "x"),
        DropdownOption::new("C", "y"),
    ];
    let resolved = resolve_options(&options, &[]);
    assert_eq!(resolved.duplicate_values(), vec![&text("x")]);
}

// =============================================================================
// Search Filter
// =============================================================================

#[test]
fn test_filter_empty_query_borrows_input() {
    let options = fruits(&["Apple", "Banana"]);
    let filtered = filter_options(&options, "");
    assert!(matches!(filtered, Cow::Borrowed(_)));
    assert_eq!(&*filtered, options.as_slice());
}

#[test]
fn test_filter_case_insensitive_substring() {
    let options = fruits(&["Apple", "Banana", "Cherry", "Date"]);
    let filtered = filter_options(&options, "an");
    let labels: Vec<&str> = filtered.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Banana"]);

    let filtered = filter_options(&options, "APP");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].label, "Apple");
}

#[test]
fn test_filter_is_substring_not_fuzzy() {
    let options = fruits(&["Apple", "Apricot"]);
    // "apt" is a fuzzy subsequence of "Apricot" but not a substring.
    assert!(filter_options(&options, "apt").is_empty());
}

#[test]
fn test_filter_preserves_order() {
    let options = fruits(&["Banana", "Apple", "Bandana", "Cabana"]);
    let labels: Vec<String> = filter_options(&options, "ana")
        .iter()
        .map(|o| o.label.clone())
        .collect();
    assert_eq!(labels, vec!["Banana", "Bandana", "Cabana"]);
}

#[test]
fn test_filter_idempotent() {
    let options = fruits(&["Apple", "Banana", "Pineapple", "Grape"]);
    for query in ["", "a", "pp", "ape", "zzz", "E"] {
        let once = filter_options(&options, query).into_owned();
        let twice = filter_options(&once, query).into_owned();
        assert_eq!(once, twice, "query {:?}", query);
    }
}

#[test]
fn test_matching_indices() {
    let options = fruits(&["Apple", "Banana", "Cherry"]);
    assert_eq!(matching_indices(&options, ""), vec![0, 1, 2]);
    assert_eq!(matching_indices(&options, "e"), vec![0, 2]);
}

#[test]
fn test_filter_non_ascii_labels() {
    let options = fruits(&["naïve café", "ñabc", "añb cd", "crème brûlée", "naïve cafe"]);
    let cases: [(&str, &[&str]); 6] = [
        ("café", &["naïve café"]),
        ("CAFÉ", &["naïve café"]),
        ("bc", &["ñabc"]),
        ("cd", &["añb cd"]),
        ("brûlée", &["crème brûlée"]),
        ("cafe", &["naïve cafe"]),
    ];

    for (query, expected) in cases {
        let labels: Vec<String> = filter_options(&options, query)
            .iter()
            .map(|o| o.label.clone())
            .collect();
        assert_eq!(labels, expected, "query {:?}", query);
    }
}

#[test]
fn test_label_matcher_mixed_scripts() {
    let mut matcher = LabelMatcher::new("Ée");
    assert!(matcher.matches("crème brûlÉe"));
    assert!(!matcher.matches("cafe"));

    let mut matcher = LabelMatcher::new("an");
    assert!(matcher.matches("Banana"));
    assert!(matcher.matches("Ñandú anís"));
    assert!(!matcher.matches("Ñu"));
}

// =============================================================================
// Selection Controller
// =============================================================================

#[test]
fn test_single_select_commit_replaces_and_closes() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["Apple", "Banana"])));
    dd.set_value(SelectionValue::Single(Some(text("apple"))));
    dd.open();

    assert!(dd.select_index(1));
    assert_eq!(
        *calls.borrow(),
        vec![SelectionValue::Single(Some(text("banana")))]
    );
    assert!(!dd.is_open());
}

#[test]
fn test_disabled_option_is_inert() {
    let options = vec![
        DropdownOption::new("Apple", "apple"),
        DropdownOption::new("Banana", "banana").disabled(),
    ];
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(options));
    dd.open();

    assert!(!dd.select_index(1));
    dd.handle_click(Some(&option_part(&dd, 1)));
    assert!(calls.borrow().is_empty());
    assert!(dd.is_open());
}

#[test]
fn test_multi_toggle_adds_and_removes() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    dd.open();

    dd.select_index(0);
    sync(&mut dd, &calls);
    dd.select_index(2);
    sync(&mut dd, &calls);
    assert_eq!(dd.value(), &multi(&["apple", "cherry"]));

    dd.select_index(0);
    sync(&mut dd, &calls);
    assert_eq!(dd.value(), &multi(&["cherry"]));
    // Multi-select stays open
    assert!(dd.is_open());
}

#[test]
fn test_multi_toggle_at_max_is_noop() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry"]))
        .multi_select()
        .max_selections(2);
    let (mut dd, calls) = dropdown(config);
    dd.set_value(multi(&["apple", "banana"]));

    assert!(!dd.select_index(2));
    assert!(calls.borrow().is_empty());

    // Removing is still allowed at the limit
    assert!(dd.select_index(1));
    assert_eq!(calls.borrow().last(), Some(&multi(&["apple"])));
}

#[test]
fn test_zero_max_from_builder_is_unlimited() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana"]))
        .multi_select()
        .max_selections(0);
    let (mut dd, calls) = dropdown(config);
    assert_eq!(dd.config().max_selections, None);

    dd.select_index(0);
    sync(&mut dd, &calls);
    dd.select_index(1);
    assert_eq!(calls.borrow().last(), Some(&multi(&["apple", "banana"])));

    dd.set_config(DropdownConfig::new().multi_select().max_selections(0));
    assert_eq!(dd.config().max_selections, None);
}

#[test]
fn test_select_all_without_max() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);

    assert!(dd.select_all());
    assert_eq!(
        calls.borrow().last(),
        Some(&multi(&["apple", "banana", "cherry"]))
    );
}

#[test]
fn test_select_all_truncates_to_max() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry", "Date"]))
        .multi_select()
        .max_selections(2);
    let (mut dd, calls) = dropdown(config);

    dd.select_all();
    assert_eq!(calls.borrow().last(), Some(&multi(&["apple", "banana"])));
}

#[test]
fn test_select_all_uses_filtered_list() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Pineapple"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    dd.open();
    dd.set_search("apple");

    dd.select_all();
    assert_eq!(calls.borrow().last(), Some(&multi(&["apple", "pineapple"])));
}

#[test]
fn test_select_all_single_mode_unavailable() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    assert!(!dd.select_all());
    assert!(!dd.select_random());
    assert!(!dd.clear_all());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_select_top_n() {
    let mut options = fruits(&["Apple", "Banana", "Cherry", "Date", "Elderberry"]);
    options[1].disabled = true;
    let config = DropdownConfig::new().options(options).multi_select();
    let (mut dd, calls) = dropdown(config);

    // No max configured: default draw size of 3, skipping disabled options
    dd.select_top_n();
    assert_eq!(
        calls.borrow().last(),
        Some(&multi(&["apple", "cherry", "date"]))
    );
}

#[test]
fn test_random_selection_size_and_membership() {
    let mut options = fruits(&["Apple", "Banana", "Cherry", "Date", "Elderberry"]);
    options[4].disabled = true;
    let config = DropdownConfig::new()
        .options(options)
        .multi_select()
        .max_selections(2);
    let (dd, calls) = dropdown(config);
    let mut dd = dd.with_seed(7);

    for _ in 0..50 {
        dd.select_random();
        let last = calls.borrow().last().cloned().expect("change reported");
        assert_eq!(last.len(), 2);
        assert!(!last.contains(&text("elderberry")));
        let values = last.values();
        assert_ne!(values[0], values[1]);
    }
}

#[test]
fn test_random_selection_fewer_enabled_than_n() {
    let options = vec![
        DropdownOption::new("Apple", "apple"),
        DropdownOption::new("Banana", "banana").disabled(),
    ];
    let refs: Vec<&DropdownOption> = options.iter().collect();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(random_selection(&refs, 3, &mut rng), vec![text("apple")]);
}

#[test]
fn test_random_selection_is_uniform() {
    let options = fruits(&["A", "B", "C", "D", "E"]);
    let refs: Vec<&DropdownOption> = options.iter().collect();
    let mut rng = StdRng::seed_from_u64(42);
    let trials = 5000;
    let mut counts = [0usize; 5];

    for _ in 0..trials {
        for value in random_selection(&refs, 2, &mut rng) {
            let index = options.iter().position(|o| o.value == value).unwrap();
            counts[index] += 1;
        }
    }

    // Each option should be drawn in 2/5 of trials.
    for (i, count) in counts.iter().enumerate() {
        let rate = *count as f64 / trials as f64;
        assert!((rate - 0.4).abs() < 0.04, "option {} drawn at rate {}", i, rate);
    }
}

#[test]
fn test_clear_all_idempotent() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    dd.set_value(multi(&["apple"]));

    assert!(dd.clear_all());
    sync(&mut dd, &calls);
    assert_eq!(dd.value(), &multi(&[]));

    // Already empty: no second report
    assert!(!dd.clear_all());
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_clear_requires_clearable() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    dd.set_value(SelectionValue::Single(Some(text("apple"))));
    assert!(!dd.clear());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_clear_single_and_multi() {
    let (mut dd, calls) = dropdown(
        DropdownConfig::new()
            .options(fruits(&["Apple"]))
            .clearable(),
    );
    dd.set_value(SelectionValue::Single(Some(text("apple"))));
    dd.handle_click(Some(&dd.id().part("clear")));
    assert_eq!(calls.borrow().last(), Some(&SelectionValue::Single(None)));

    let (mut dd, calls) = dropdown(
        DropdownConfig::new()
            .options(fruits(&["Apple"]))
            .multi_select()
            .clearable(),
    );
    dd.set_value(multi(&["apple"]));
    assert!(dd.clear());
    assert_eq!(calls.borrow().last(), Some(&multi(&[])));
}

#[test]
fn test_disabled_dropdown_ignores_everything() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple"]))
        .multi_select()
        .disabled();
    let (mut dd, calls) = dropdown(config);

    assert_eq!(key(&mut dd, Key::Down), EventResult::Ignored);
    dd.handle_click(Some(&dd.id_string()));
    assert!(!dd.is_open());
    assert!(!dd.select_index(0));
    assert!(!dd.select_all());
    assert!(calls.borrow().is_empty());
}

// =============================================================================
// Open/Close State Machine
// =============================================================================

#[test]
fn test_trigger_click_toggles_and_reports() {
    let (open_calls, on_open) = recorder();
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    dd = dd.on_open_change(on_open);
    let trigger = dd.id_string();

    dd.handle_click(Some(&trigger));
    assert!(dd.is_open());
    dd.handle_click(Some(&trigger));
    assert!(!dd.is_open());
    assert_eq!(*open_calls.borrow(), vec![true, false]);
}

#[test]
fn test_outside_click_closes_and_resets() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana"]))
        .searchable();
    let (mut dd, _) = dropdown(config);
    key(&mut dd, Key::Down);
    dd.set_search("a");
    key(&mut dd, Key::Down);
    assert_eq!(dd.focused_index(), Some(0));

    assert_eq!(dd.handle_click(Some("some-other-element")), EventResult::Ignored);
    assert!(!dd.is_open());
    assert_eq!(dd.focused_index(), None);
    assert_eq!(dd.search_text(), "");
    assert_eq!(dd.filtered_len(), 2);
}

#[test]
fn test_click_with_no_target_is_outside() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    dd.open();
    dd.handle_click(None);
    assert!(!dd.is_open());
}

#[test]
fn test_clicks_inside_panel_keep_it_open() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple"]))
        .searchable()
        .multi_select();
    let (mut dd, _) = dropdown(config);
    dd.open();

    for part in ["search", "list", "group-x"] {
        dd.handle_click(Some(&dd.id().part(part)));
        assert!(dd.is_open(), "click on {} closed the panel", part);
    }
}

#[test]
fn test_done_closes_multi_select() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    dd.open();
    dd.handle_click(Some(&dd.id().part("action-done")));
    assert!(!dd.is_open());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_opening_does_not_change_selection() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    dd.set_value(SelectionValue::Single(Some(text("apple"))));
    dd.open();
    assert!(calls.borrow().is_empty());
    assert_eq!(dd.value(), &SelectionValue::Single(Some(text("apple"))));
}

// =============================================================================
// Keyboard Navigation
// =============================================================================

#[test]
fn test_arrow_down_opens_at_first() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A", "B", "C"])));
    assert_eq!(key(&mut dd, Key::Down), EventResult::Consumed);
    assert!(dd.is_open());
    assert_eq!(dd.focused_index(), Some(0));
}

#[test]
fn test_arrow_up_opens_at_last() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A", "B", "C"])));
    key(&mut dd, Key::Up);
    assert!(dd.is_open());
    assert_eq!(dd.focused_index(), Some(2));
}

#[test]
fn test_navigation_clamps_without_wrap() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A", "B"])));
    key(&mut dd, Key::Down);
    key(&mut dd, Key::Down);
    key(&mut dd, Key::Down);
    assert_eq!(dd.focused_index(), Some(1));
    key(&mut dd, Key::Up);
    key(&mut dd, Key::Up);
    key(&mut dd, Key::Up);
    assert_eq!(dd.focused_index(), Some(0));
}

#[test]
fn test_enter_commits_focused_option() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["A", "B"])));
    key(&mut dd, Key::Down);
    key(&mut dd, Key::Down);
    key(&mut dd, Key::Enter);
    assert_eq!(
        *calls.borrow(),
        vec![SelectionValue::Single(Some(text("b")))]
    );
    assert!(!dd.is_open());
    assert_eq!(dd.focused_index(), None);
}

#[test]
fn test_enter_and_space_open_when_closed() {
    let (mut dd, calls) = dropdown(DropdownConfig::new().options(fruits(&["A"])));
    key(&mut dd, Key::Enter);
    assert!(dd.is_open());
    assert_eq!(dd.focused_index(), None);

    // Open without focus: Enter does nothing
    key(&mut dd, Key::Enter);
    assert!(dd.is_open());
    assert!(calls.borrow().is_empty());

    dd.close();
    key(&mut dd, Key::Char(' '));
    assert!(dd.is_open());
}

#[test]
fn test_space_commits_in_multi_select() {
    let config = DropdownConfig::new()
        .options(fruits(&["A", "B"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    key(&mut dd, Key::Down);
    key(&mut dd, Key::Char(' '));
    assert_eq!(calls.borrow().last(), Some(&multi(&["a"])));
    assert!(dd.is_open());
}

#[test]
fn test_escape_closes_and_noop_when_closed() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A"])));
    key(&mut dd, Key::Down);
    assert_eq!(key(&mut dd, Key::Escape), EventResult::Consumed);
    assert!(!dd.is_open());
    assert_eq!(dd.focused_index(), None);
    assert_eq!(key(&mut dd, Key::Escape), EventResult::Ignored);
}

#[test]
fn test_tab_closes_but_passes_through() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A"])));
    key(&mut dd, Key::Down);
    assert_eq!(key(&mut dd, Key::Tab), EventResult::Ignored);
    assert!(!dd.is_open());
}

#[test]
fn test_unlisted_keys_pass_through() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A"])));
    assert_eq!(key(&mut dd, Key::Char('x')), EventResult::Ignored);
    key(&mut dd, Key::Down);
    assert_eq!(key(&mut dd, Key::F(5)), EventResult::Ignored);
    assert_eq!(key(&mut dd, Key::Left), EventResult::Ignored);
    assert_eq!(
        dd.handle_key(Key::Down, Modifiers::ctrl()),
        EventResult::Ignored
    );
}

#[test]
fn test_arrow_keys_on_empty_list() {
    let (mut dd, _) = dropdown(DropdownConfig::new());
    key(&mut dd, Key::Down);
    assert!(dd.is_open());
    assert_eq!(dd.focused_index(), None);
    key(&mut dd, Key::Up);
    assert_eq!(dd.focused_index(), None);
    dd.close();
    key(&mut dd, Key::Up);
    assert_eq!(dd.focused_index(), None);
}

#[test]
fn test_focus_never_leaves_filtered_range() {
    use rand::Rng;

    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry", "Date", "Fig"]))
        .searchable()
        .multi_select()
        .max_selections(2);
    let (mut dd, calls) = dropdown(config);
    let keys = [
        Key::Down,
        Key::Up,
        Key::Enter,
        Key::Char(' '),
        Key::Escape,
        Key::Tab,
        Key::Char('a'),
        Key::Char('n'),
        Key::Char('e'),
        Key::Backspace,
    ];
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..2000 {
        let k = keys[rng.random_range(0..keys.len())];
        dd.handle_key(k, Modifiers::NONE);
        sync(&mut dd, &calls);
        if let Some(index) = dd.focused_index() {
            assert!(index < dd.filtered_len(), "focus {} of {}", index, dd.filtered_len());
        }
        if !dd.is_open() {
            assert_eq!(dd.focused_index(), None);
            assert_eq!(dd.search_text(), "");
        }
    }
}

#[test]
fn test_typing_filters_and_reports_search() {
    let (search_calls, on_search) = recorder();
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry"]))
        .searchable();
    let (dd, _) = dropdown(config);
    let mut dd = dd.on_search(on_search);

    key(&mut dd, Key::Down);
    assert_eq!(dd.focused_index(), Some(0));
    key(&mut dd, Key::Char('c'));
    assert_eq!(dd.focused_index(), None);
    key(&mut dd, Key::Char('h'));
    assert_eq!(dd.filtered_len(), 1);
    key(&mut dd, Key::Backspace);
    assert_eq!(*search_calls.borrow(), vec!["c", "ch", "c"]);
    assert_eq!(dd.filtered_len(), 1);
}

#[test]
fn test_space_types_into_search_without_focus() {
    let config = DropdownConfig::new()
        .options(fruits(&["Dragon fruit", "Date"]))
        .searchable();
    let (mut dd, calls) = dropdown(config);
    dd.open();
    for c in "on f".chars() {
        key(&mut dd, Key::Char(c));
    }
    assert_eq!(dd.search_text(), "on f");
    assert_eq!(dd.filtered_len(), 1);
    assert!(calls.borrow().is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_trigger_label() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry"]))
        .multi_select()
        .placeholder("Pick fruit");
    let (mut dd, _) = dropdown(config);
    assert_eq!(dd.view().trigger.label, "Pick fruit");
    assert!(dd.view().trigger.is_placeholder);

    dd.set_value(multi(&["cherry", "apple"]));
    assert_eq!(dd.view().trigger.label, "Cherry, Apple");
}

#[test]
fn test_unknown_value_shows_placeholder() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    dd.set_value(SelectionValue::Single(Some(text("mango"))));
    let view = dd.view();
    assert_eq!(view.trigger.label, "Select...");
    assert!(view.trigger.is_placeholder);
}

#[test]
fn test_closed_view_has_no_panel() {
    let (dd, _) = dropdown(DropdownConfig::new().options(fruits(&["Apple"])));
    assert!(dd.view().panel.is_none());
}

#[test]
fn test_grouped_rows_skip_empty_groups() {
    let groups = vec![
        OptionGroup::new("Fruit", "fruit", fruits(&["Apple", "Banana"])),
        OptionGroup::new("Veg", "veg", fruits(&["Carrot", "Bean"])),
    ];
    let config = DropdownConfig::new().option_groups(groups).searchable();
    let (mut dd, _) = dropdown(config);
    dd.open();
    dd.set_search("an");

    let panel = dd.view().panel.expect("open panel");
    let PanelBody::Rows(rows) = panel.body else {
        panic!("expected rows");
    };
    let summary: Vec<String> = rows
        .iter()
        .map(|row| match row {
            ListRow::GroupHeader { label, .. } => format!("# {}", label),
            ListRow::Option(option) => format!("{}:{}", option.index, option.label),
        })
        .collect();
    assert_eq!(summary, vec!["# Fruit", "0:Banana", "# Veg", "1:Bean"]);
}

#[test]
fn test_rows_flag_selected_and_focused() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana"]))
        .multi_select();
    let (mut dd, _) = dropdown(config);
    dd.set_value(multi(&["banana"]));
    key(&mut dd, Key::Down);

    let PanelBody::Rows(rows) = dd.view().panel.expect("open panel").body else {
        panic!("expected rows");
    };
    let flags: Vec<(bool, bool)> = rows
        .iter()
        .filter_map(|row| match row {
            ListRow::Option(o) => Some((o.selected, o.focused)),
            ListRow::GroupHeader { .. } => None,
        })
        .collect();
    assert_eq!(flags, vec![(false, true), (true, false)]);
}

#[test]
fn test_loading_and_error_take_precedence() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple"]))
        .loading(true);
    let (mut dd, _) = dropdown(config);
    dd.open();
    assert_eq!(dd.view().panel.unwrap().body, PanelBody::Loading);

    dd.set_loading(false);
    dd.set_error(Some("offline".into()));
    assert_eq!(
        dd.view().panel.unwrap().body,
        PanelBody::Error("offline".into())
    );

    dd.set_error(None);
    dd.set_search("zzz");
    assert_eq!(
        dd.view().panel.unwrap().body,
        PanelBody::Empty("No options available".into())
    );
}

#[test]
fn test_footer_only_in_multi_select() {
    let (mut single, _) = dropdown(DropdownConfig::new().options(fruits(&["A"])));
    single.open();
    assert!(single.view().panel.unwrap().footer.is_none());

    let config = DropdownConfig::new()
        .options(fruits(&["A"]))
        .multi_select()
        .max_selections(4);
    let (mut dd, _) = dropdown(config);
    dd.open();
    let footer = dd.view().panel.unwrap().footer.expect("footer");
    let labels: Vec<&str> = footer.actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Select All", "Select Top 4", "Random 4", "Clear All", "Done"]
    );
}

#[test]
fn test_accent_precedence() {
    use dropkit::widgets::dropdown::Accent;

    let (dd, _) = dropdown(DropdownConfig::new().color("red").gradient("sunset"));
    assert_eq!(dd.view().trigger.accent, Accent::Gradient("sunset".into()));
    let (dd, _) = dropdown(DropdownConfig::new().color("red"));
    assert_eq!(dd.view().trigger.accent, Accent::Color("red".into()));
    let (dd, _) = dropdown(DropdownConfig::new());
    assert_eq!(dd.view().trigger.accent, Accent::Theme);
}

#[test]
fn test_options_change_resets_focus() {
    let (mut dd, _) = dropdown(DropdownConfig::new().options(fruits(&["A", "B", "C"])));
    key(&mut dd, Key::Up);
    assert_eq!(dd.focused_index(), Some(2));
    dd.set_options(fruits(&["A", "B", "C", "D"]));
    assert_eq!(dd.focused_index(), None);
    assert!(dd.is_open());
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[test]
fn test_scenario_single_select_click() {
    let (mut dd, calls) =
        dropdown(DropdownConfig::new().options(fruits(&["Apple", "Banana", "Cherry"])));
    dd.handle_click(Some(&dd.id_string()));
    dd.handle_click(Some(&option_part(&dd, 1)));

    assert_eq!(
        *calls.borrow(),
        vec![SelectionValue::Single(Some(text("banana")))]
    );
    assert!(!dd.is_open());
}

#[test]
fn test_scenario_multi_select_max_three() {
    let config = DropdownConfig::new()
        .options(fruits(&[
            "Apple",
            "Banana",
            "Cherry",
            "Date",
            "Elderberry",
            "Fig",
        ]))
        .multi_select()
        .max_selections(3);
    let (mut dd, calls) = dropdown(config);
    dd.handle_click(Some(&dd.id_string()));

    for index in 0..4 {
        dd.handle_click(Some(&option_part(&dd, index)));
        sync(&mut dd, &calls);
    }

    let calls = calls.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], multi(&["apple"]));
    assert_eq!(calls[1], multi(&["apple", "banana"]));
    assert_eq!(calls[2], multi(&["apple", "banana", "cherry"]));
}

#[test]
fn test_scenario_select_all() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry", "Date"]))
        .multi_select();
    let (mut dd, calls) = dropdown(config);
    dd.handle_click(Some(&dd.id_string()));
    dd.handle_click(Some(&dd.id().part("action-select-all")));

    assert_eq!(
        *calls.borrow(),
        vec![multi(&["apple", "banana", "cherry", "date"])]
    );
}

#[test]
fn test_scenario_search_an() {
    let config = DropdownConfig::new()
        .options(fruits(&["Apple", "Banana", "Cherry", "Date"]))
        .searchable();
    let (mut dd, _) = dropdown(config);
    dd.handle_click(Some(&dd.id_string()));
    key(&mut dd, Key::Char('a'));
    key(&mut dd, Key::Char('n'));

    let labels: Vec<&str> = dd
        .filtered_options()
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Banana"]);
}
