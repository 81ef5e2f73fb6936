use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use currency_converter::cli::state::{App, Dialog, Focus, MenuItem, Selection};
use currency_converter::conversion::Currency;
use rust_decimal_macros::dec;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn enter_converts_and_opens_result() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "100");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.output, "1733.49");
    match &app.dialog {
        Some(Dialog::Result(conv)) => {
            assert_eq!(conv.request.amount, dec!(100));
            assert_eq!(conv.request.from, Currency::Usd);
            assert_eq!(conv.request.to, Currency::Mxn);
            assert_eq!(
                conv.summary(),
                "US Dollar to Mexican Peso\n100.00 is equivalent to 1733.49"
            );
        }
        other => panic!("expected result dialog, got {other:?}"),
    }

    app.handle_key(key(KeyCode::Enter));
    assert!(app.dialog.is_none());
    assert_eq!(app.output, "1733.49");
}

#[test]
fn invalid_input_shows_error_and_keeps_output() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "5");
    app.convert();
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.output, "86.67");

    app.amount.clear();
    type_str(&mut app, "abc");
    app.handle_key(key(KeyCode::F(5)));
    assert_eq!(app.dialog, Some(Dialog::InputError));
    assert_eq!(app.output, "86.67");
}

#[test]
fn empty_input_is_an_error_not_zero() {
    let mut app = App::new(Selection::default());
    app.convert();
    assert_eq!(app.dialog, Some(Dialog::InputError));

    app.handle_key(key(KeyCode::Enter));
    type_str(&mut app, "0");
    app.convert();
    assert_eq!(app.output, "0.00");
    assert!(matches!(app.dialog, Some(Dialog::Result(_))));
}

#[test]
fn same_currency_passes_amount_through() {
    let mut app = App::new(Selection { from: Currency::Eur, to: Currency::Eur });
    type_str(&mut app, "12.345");
    app.convert();
    assert_eq!(app.output, "12.35");
}

#[test]
fn selection_changes_the_pair() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "100");
    // Amount -> To: MXN becomes EUR
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::To);
    app.handle_key(key(KeyCode::Right));
    // Back to From: USD becomes MXN
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.selection, Selection { from: Currency::Mxn, to: Currency::Eur });

    app.convert();
    assert_eq!(app.output, "5.31");
}

#[test]
fn clear_button_empties_fields() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "42");
    app.convert();
    app.handle_key(key(KeyCode::Enter));

    app.focus = Focus::Clear;
    app.handle_key(key(KeyCode::Enter));
    assert!(app.amount.value.is_empty());
    assert_eq!(app.amount.cursor, 0);
    assert!(app.output.is_empty());
    assert_eq!(app.selection, Selection::default());
}

#[test]
fn menu_items_match_buttons() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "1");
    app.activate_menu(MenuItem::Convert);
    assert!(matches!(app.dialog, Some(Dialog::Result(_))));

    app.activate_menu(MenuItem::Clear);
    assert!(app.output.is_empty());

    app.activate_menu(MenuItem::Exit);
    assert_eq!(app.dialog, Some(Dialog::ConfirmExit { yes_focused: true }));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.quit);
}

#[test]
fn amount_too_large_shows_error_and_keeps_output() {
    let mut app = App::new(Selection::default());
    type_str(&mut app, "5");
    app.convert();
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.output, "86.67");

    app.amount.clear();
    type_str(&mut app, "1e28");
    app.convert();
    assert_eq!(app.dialog, Some(Dialog::InputError));
    assert_eq!(app.output, "86.67");
    assert!(app.status.contains("too large"));
    assert!(!app.quit);
}

#[test]
fn largest_amount_still_converts_downwards() {
    let mut app = App::new(Selection { from: Currency::Mxn, to: Currency::Usd });
    type_str(&mut app, "79228162514264337593543950335");
    app.convert();
    assert!(matches!(app.dialog, Some(Dialog::Result(_))));
    assert!(!app.output.is_empty());
}
