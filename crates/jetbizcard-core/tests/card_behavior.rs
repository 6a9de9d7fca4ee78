//! Behaviour of the mounted card through the Screen runtime.

use jetbizcard_core::{
    diff, Action, CardContent, Patch, Person, PortfolioItem, RevealState, Role, Screen,
    ThemeConfig, ROW_CAPTION, TOGGLE_LABEL,
};

fn info_texts(screen: &Screen) -> Vec<String> {
    screen
        .tree()
        .find(Role::InfoBlock)
        .expect("info block is always rendered")
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn row_titles(screen: &Screen) -> Vec<String> {
    screen
        .tree()
        .find_all(Role::RowTitle)
        .into_iter()
        .filter_map(|n| n.text_content().map(str::to_string))
        .collect()
}

#[test]
fn initial_render_shows_card_without_portfolio() {
    let screen = Screen::mount(CardContent::default());
    let tree = screen.tree();

    assert!(tree.contains(Role::Avatar));
    assert!(tree.contains(Role::InfoBlock));
    assert!(tree.contains(Role::ToggleButton));
    assert!(!tree.contains(Role::RevealPanel));
    assert!(!tree.contains(Role::PortfolioList));
    assert_eq!(screen.state(), RevealState::default());
}

#[test]
fn one_activation_reveals_ten_projects_in_order() {
    let screen = Screen::mount(CardContent::default());
    screen.dispatch(Action::ToggleReveal);

    let tree = screen.tree();
    let list = tree.find(Role::PortfolioList).expect("list after one toggle");
    assert_eq!(list.children.len(), 10);

    let expected: Vec<String> = (1..=10).map(|n| format!("Project {}", n)).collect();
    assert_eq!(row_titles(&screen), expected);
}

#[test]
fn two_activations_hide_portfolio_again() {
    let screen = Screen::mount(CardContent::default());
    screen.dispatch(Action::ToggleReveal);
    screen.dispatch(Action::ToggleReveal);

    assert!(!screen.tree().contains(Role::PortfolioList));
    assert!(!screen.state().visible);
    assert_eq!(screen.state().activations, 2);
}

#[test]
fn info_block_is_independent_of_reveal_state() {
    let screen = Screen::mount(CardContent::default());
    let expected = vec![
        "Pedro Bruno".to_string(),
        "Android Compose Programmer".to_string(),
        "@pedrobrunof".to_string(),
    ];

    for _ in 0..3 {
        assert_eq!(info_texts(&screen), expected);
        screen.dispatch(Action::ToggleReveal);
    }
}

#[test]
fn info_block_renders_configured_person() {
    let content = CardContent {
        person: Person {
            name: "Ada Lovelace".to_string(),
            profession: "Analyst".to_string(),
            handle: "@ada".to_string(),
        },
        ..CardContent::default()
    };
    let screen = Screen::mount(content);
    assert_eq!(info_texts(&screen), vec!["Ada Lovelace", "Analyst", "@ada"]);
}

#[test]
fn every_caption_is_fixed() {
    let content = CardContent {
        projects: vec![
            PortfolioItem::new("Compiler"),
            PortfolioItem::new(""),
            PortfolioItem::new("A great Project"),
        ],
        ..CardContent::default()
    };
    let screen = Screen::mount(content);
    screen.dispatch(Action::ToggleReveal);

    let tree = screen.tree();
    let captions = tree.find_all(Role::RowCaption);
    assert_eq!(captions.len(), 3);
    assert!(captions.iter().all(|c| c.text_content() == Some(ROW_CAPTION)));
}

#[test]
fn rerender_without_change_is_identical() {
    let screen = Screen::mount(CardContent::default());
    assert_eq!(screen.render(), screen.tree());
    assert!(diff(&screen.tree(), &screen.render()).is_empty());

    screen.dispatch(Action::ToggleReveal);
    assert_eq!(screen.render(), screen.render());
    assert_eq!(screen.render(), screen.tree());
}

#[test]
fn each_toggle_rerenders_exactly_once() {
    let screen = Screen::mount(CardContent::default());
    for n in 1..=5u64 {
        screen.dispatch(Action::ToggleReveal);
        assert_eq!(screen.render_count(), n + 1);
    }
}

#[test]
fn toggle_diff_is_a_single_panel_patch() {
    let screen = Screen::mount(CardContent::default());

    screen.dispatch(Action::ToggleReveal);
    assert_eq!(
        screen.last_patches(),
        vec![Patch::Insert { path: vec![0, 0, 4], role: Role::RevealPanel }]
    );

    screen.dispatch(Action::ToggleReveal);
    assert_eq!(
        screen.last_patches(),
        vec![Patch::Remove { path: vec![0, 0, 4], role: Role::RevealPanel }]
    );
}

#[test]
fn toggle_button_keeps_its_label() {
    let screen = Screen::mount(CardContent::default());
    for _ in 0..2 {
        let tree = screen.tree();
        let button = tree.find(Role::ToggleButton).unwrap();
        assert_eq!(button.texts(), vec![TOGGLE_LABEL]);
        screen.dispatch(Action::ToggleReveal);
    }
}

#[test]
fn root_screen_is_light_even_when_asked_for_dark_elsewhere() {
    let screen = Screen::mount(CardContent::default());
    let light = ThemeConfig::light();
    assert_eq!(
        screen.tree().style.get("background"),
        Some(light.colors.background.as_str())
    );

    let dark = Screen::mount_with_theme(CardContent::default(), ThemeConfig::dark());
    assert_ne!(dark.tree(), screen.tree());
}
