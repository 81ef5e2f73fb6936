// src/cli/state.rs
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error, info, warn};

use crate::cli::input::LineEdit;
use crate::config::Config;
use crate::conversion::{fmt_money, Conversion, ConversionError, ConversionRequest, Currency, RateTable};

pub const INPUT_ERROR_TEXT: &str = "Please enter a valid number for the currency amount.";
pub const ABOUT_TEXT: &str =
    "Currency Converter Program\nusing menus and buttons\nsource: https://www.oanda.com/currency-converter/";
pub const EXIT_PROMPT: &str = "Are you sure?";
const READY_STATUS: &str = "Tab: move | ←/→: choose | Enter: convert | F10: menu | Esc: exit";

/// The two radio groups. Exactly one currency per side is selected at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub from: Currency,
    pub to: Currency,
}

impl Default for Selection {
    fn default() -> Self {
        Self { from: Currency::Usd, to: Currency::Mxn }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    From,
    Amount,
    To,
    Convert,
    Clear,
    Exit,
}

impl Focus {
    fn next(self) -> Self {
        use Focus::*;
        match self { From => Amount, Amount => To, To => Convert, Convert => Clear, Clear => Exit, Exit => From }
    }
    fn prev(self) -> Self {
        use Focus::*;
        match self { From => Exit, Amount => From, To => Amount, Convert => To, Clear => Convert, Exit => Clear }
    }
    pub fn is_button(self) -> bool {
        matches!(self, Focus::Convert | Focus::Clear | Focus::Exit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    About,
    Convert,
    Clear,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [MenuItem::About, MenuItem::Convert, MenuItem::Clear, MenuItem::Exit];
    /// A separator row is drawn after each of these indices.
    pub const SEPARATORS_AFTER: [usize; 2] = [0, 2];

    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Convert => "Convert",
            Self::Clear => "Clear",
            Self::Exit => "Exit",
        }
    }
}

/// Modal dialogs. While one is open it receives every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Result(Conversion),
    InputError,
    About,
    ConfirmExit { yes_focused: bool },
    FileMenu { selected: usize },
}

pub struct App {
    pub rates: &'static RateTable,
    pub selection: Selection,
    pub amount: LineEdit,
    pub output: String,
    pub focus: Focus,
    pub dialog: Option<Dialog>,
    pub status: String,
    pub quit: bool,
}

impl App {
    pub fn new(selection: Selection) -> Self {
        Self {
            rates: RateTable::fixed(),
            selection,
            amount: LineEdit::default(),
            output: String::new(),
            focus: Focus::Amount,
            dialog: None,
            status: READY_STATUS.into(),
            quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Selection { from: config.default_from, to: config.default_to })
    }

    pub fn handle_key(&mut self, k: KeyEvent) {
        if k.kind != KeyEventKind::Press { return; }
        debug!("key {:?} focus {:?} dialog {:?}", k.code, self.focus, self.dialog);

        if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        if self.dialog.is_some() {
            self.handle_dialog_key(k);
            return;
        }

        match k.code {
            KeyCode::F(1) => { self.show_about(); return; }
            KeyCode::F(5) => { self.convert(); return; }
            KeyCode::F(10) => { self.dialog = Some(Dialog::FileMenu { selected: 0 }); return; }
            KeyCode::Esc => { self.request_exit(); return; }
            KeyCode::Tab => { self.focus = self.focus.next(); return; }
            KeyCode::BackTab => { self.focus = self.focus.prev(); return; }
            _ => {}
        }

        match self.focus {
            Focus::From | Focus::To => match k.code {
                KeyCode::Left | KeyCode::Up => self.cycle_selection(-1),
                KeyCode::Right | KeyCode::Down => self.cycle_selection(1),
                KeyCode::Enter => self.convert(),
                KeyCode::Char('q') => self.request_exit(),
                _ => {}
            },
            Focus::Amount => self.handle_amount_input(k),
            Focus::Convert | Focus::Clear | Focus::Exit => match k.code {
                KeyCode::Left => self.focus = self.focus.prev(),
                KeyCode::Right => self.focus = self.focus.next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_button(),
                KeyCode::Char('q') => self.request_exit(),
                _ => {}
            },
        }
    }

    fn handle_amount_input(&mut self, k: KeyEvent) {
        match k.code {
            KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => self.amount.push(c),
            KeyCode::Backspace => self.amount.backspace(),
            KeyCode::Delete => self.amount.delete(),
            KeyCode::Left => self.amount.left(),
            KeyCode::Right => self.amount.right(),
            KeyCode::Home => self.amount.home(),
            KeyCode::End => self.amount.end(),
            KeyCode::Enter => self.convert(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, k: KeyEvent) {
        let Some(dialog) = self.dialog.take() else { return };
        match dialog {
            Dialog::Result(_) | Dialog::InputError | Dialog::About => match k.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {}
                _ => self.dialog = Some(dialog),
            },
            Dialog::ConfirmExit { yes_focused } => match k.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.quit = true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
                KeyCode::Enter => self.quit = yes_focused,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    self.dialog = Some(Dialog::ConfirmExit { yes_focused: !yes_focused });
                }
                _ => self.dialog = Some(dialog),
            },
            Dialog::FileMenu { selected } => {
                let len = MenuItem::ALL.len() as i32;
                match k.code {
                    KeyCode::Up => {
                        let selected = (selected as i32 - 1).rem_euclid(len) as usize;
                        self.dialog = Some(Dialog::FileMenu { selected });
                    }
                    KeyCode::Down => {
                        let selected = (selected as i32 + 1).rem_euclid(len) as usize;
                        self.dialog = Some(Dialog::FileMenu { selected });
                    }
                    KeyCode::Enter => self.activate_menu(MenuItem::ALL[selected]),
                    KeyCode::Esc | KeyCode::F(10) => {}
                    _ => self.dialog = Some(dialog),
                }
            }
        }
    }

    fn cycle_selection(&mut self, delta: i32) {
        match self.focus {
            Focus::From => self.selection.from = self.selection.from.cycle(delta),
            Focus::To => self.selection.to = self.selection.to.cycle(delta),
            _ => {}
        }
    }

    fn activate_button(&mut self) {
        match self.focus {
            Focus::Convert => self.convert(),
            Focus::Clear => self.clear(),
            Focus::Exit => self.request_exit(),
            _ => {}
        }
    }

    pub fn activate_menu(&mut self, item: MenuItem) {
        match item {
            MenuItem::About => self.show_about(),
            MenuItem::Convert => self.convert(),
            MenuItem::Clear => self.clear(),
            MenuItem::Exit => self.request_exit(),
        }
    }

    /// Reads the amount field and the selection, converts, and opens the
    /// result or input-error dialog.
    pub fn convert(&mut self) {
        let Selection { from, to } = self.selection;
        let result = ConversionRequest::parse(&self.amount.value, from, to)
            .and_then(|req| self.rates.convert(&req));

        match result {
            Ok(conv) => {
                info!("converted {}", conv.one_line());
                self.output = fmt_money(&conv.converted);
                self.status = conv.one_line();
                self.dialog = Some(Dialog::Result(conv));
            }
            Err(ConversionError::InvalidAmount(input)) => {
                warn!("invalid amount input {input:?}");
                self.status = "Input Error".into();
                self.dialog = Some(Dialog::InputError);
            }
            Err(e @ ConversionError::Overflow { .. }) => {
                warn!("{e}");
                self.status = e.to_string();
                self.dialog = Some(Dialog::InputError);
            }
            Err(e) => {
                error!("conversion failed: {e}");
                self.status = format!("Conversion failed: {e}");
            }
        }
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.output.clear();
        self.status = READY_STATUS.into();
    }

    pub fn show_about(&mut self) {
        self.dialog = Some(Dialog::About);
    }

    pub fn request_exit(&mut self) {
        self.dialog = Some(Dialog::ConfirmExit { yes_focused: true });
    }
}
