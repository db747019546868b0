use super::create_test_terminal;
use crate::test_utils::test_helpers::test_app;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_render_never_panics(
        text in "[a-z \n\t\u{00e9}\u{4e16}]{0,200}",
        width in 10u16..160,
        height in 3u16..50,
    ) {
        let (mut app, _, _) = test_app();
        app.load_text(&text);
        let mut terminal = create_test_terminal(width, height);
        prop_assert!(terminal.draw(|f| app.render(f)).is_ok());
    }
}
