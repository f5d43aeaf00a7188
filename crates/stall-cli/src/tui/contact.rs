//! Contact form dialog state and text-editing helpers.
//!
//! The dialog owns the field buffers and cursor positions; the actual
//! validation and reset semantics live in [`stall_core::contact`], which
//! the dialog defers to on submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stall_core::contact::{ContactForm, ContactStatus};

/// Which field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// What a key press did to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactDialogAction {
    None,
    /// A submit was attempted; carries the resulting status.
    Submitted(ContactStatus),
    Cancel,
}

/// Editing state of the contact dialog.
#[derive(Debug, Clone)]
pub struct ContactDialog {
    focus: ContactField,
    name: String,
    name_cursor: usize,
    email: String,
    email_cursor: usize,
    message: Vec<String>,
    msg_row: usize,
    msg_col: usize,
    status: Option<ContactStatus>,
}

impl Default for ContactDialog {
    fn default() -> Self {
        Self {
            focus: ContactField::Name,
            name: String::new(),
            name_cursor: 0,
            email: String::new(),
            email_cursor: 0,
            message: vec![String::new()],
            msg_row: 0,
            msg_col: 0,
            status: None,
        }
    }
}

impl ContactDialog {
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn status(&self) -> Option<ContactStatus> {
        self.status
    }

    /// Name buffer with the cursor marker when focused.
    pub fn name_display(&self) -> String {
        if self.focus == ContactField::Name {
            with_cursor(&self.name, self.name_cursor)
        } else {
            self.name.clone()
        }
    }

    /// Email buffer with the cursor marker when focused.
    pub fn email_display(&self) -> String {
        if self.focus == ContactField::Email {
            with_cursor(&self.email, self.email_cursor)
        } else {
            self.email.clone()
        }
    }

    /// Message lines with the cursor marker on the active line when
    /// focused.
    pub fn message_display(&self) -> Vec<String> {
        self.message
            .iter()
            .enumerate()
            .map(|(row, line)| {
                if self.focus == ContactField::Message && row == self.msg_row {
                    with_cursor(line, self.msg_col)
                } else {
                    line.clone()
                }
            })
            .collect()
    }

    fn message_text(&self) -> String {
        self.message.join("\n")
    }

    /// Handle one key press, returning what happened.
    pub fn handle_key(&mut self, key: KeyEvent) -> ContactDialogAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => return ContactDialogAction::Cancel,
            KeyCode::Char('s') if ctrl => return ContactDialogAction::Submitted(self.submit()),
            KeyCode::Enter if ctrl => return ContactDialogAction::Submitted(self.submit()),
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return ContactDialogAction::None;
            }
            KeyCode::Tab if shift => {
                self.focus = self.focus.prev();
                return ContactDialogAction::None;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return ContactDialogAction::None;
            }
            _ => {}
        }

        match self.focus {
            ContactField::Name => {
                if key.code == KeyCode::Enter {
                    self.focus = ContactField::Email;
                } else {
                    edit_single_line(&mut self.name, &mut self.name_cursor, key);
                }
            }
            ContactField::Email => {
                if key.code == KeyCode::Enter {
                    self.focus = ContactField::Message;
                } else {
                    edit_single_line(&mut self.email, &mut self.email_cursor, key);
                }
            }
            ContactField::Message => {
                edit_multiline(&mut self.message, &mut self.msg_row, &mut self.msg_col, key);
            }
        }

        ContactDialogAction::None
    }

    /// Run the core form's submit and mirror its post-submit field state
    /// back into the editing buffers: everything cleared on success,
    /// everything untouched on failure.
    fn submit(&mut self) -> ContactStatus {
        let mut form = ContactForm::new(
            self.name.clone(),
            self.email.clone(),
            self.message_text(),
        );
        let status = form.submit();

        self.name = form.name;
        self.email = form.email;
        self.message = if form.message.is_empty() {
            vec![String::new()]
        } else {
            form.message.lines().map(str::to_string).collect()
        };
        self.name_cursor = self.name_cursor.min(char_len(&self.name));
        self.email_cursor = self.email_cursor.min(char_len(&self.email));
        self.msg_row = self.msg_row.min(self.message.len() - 1);
        self.msg_col = self.msg_col.min(char_len(&self.message[self.msg_row]));
        self.status = Some(status);
        status
    }
}

// ---------------------------------------------------------------------------
// Text-editing helpers
// ---------------------------------------------------------------------------

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(idx, _)| idx)
}

fn insert_char_at(value: &mut String, char_idx: usize, ch: char) {
    let idx = byte_index_at_char(value, char_idx);
    value.insert(idx, ch);
}

fn remove_char_at(value: &mut String, char_idx: usize) {
    if char_idx >= char_len(value) {
        return;
    }
    let start = byte_index_at_char(value, char_idx);
    let end = byte_index_at_char(value, char_idx + 1);
    value.replace_range(start..end, "");
}

/// Render a field with a block cursor at the given character index.
pub fn with_cursor(value: &str, char_idx: usize) -> String {
    let mut out = String::new();
    let mut inserted = false;
    for (idx, ch) in value.chars().enumerate() {
        if idx == char_idx {
            out.push('█');
            inserted = true;
        }
        out.push(ch);
    }
    if !inserted {
        out.push('█');
    }
    out
}

fn edit_single_line(text: &mut String, cursor: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(char_len(text)),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = char_len(text),
        KeyCode::Backspace => {
            if *cursor > 0 {
                let remove_idx = *cursor - 1;
                remove_char_at(text, remove_idx);
                *cursor = remove_idx;
            }
        }
        KeyCode::Delete => {
            remove_char_at(text, *cursor);
        }
        KeyCode::Char(c) => {
            insert_char_at(text, *cursor, c);
            *cursor += 1;
        }
        _ => {}
    }
}

fn edit_multiline(lines: &mut Vec<String>, row: &mut usize, col: &mut usize, key: KeyEvent) {
    if lines.is_empty() {
        lines.push(String::new());
    }
    match key.code {
        KeyCode::Left => {
            if *col > 0 {
                *col -= 1;
            } else if *row > 0 {
                *row -= 1;
                *col = char_len(&lines[*row]);
            }
        }
        KeyCode::Right => {
            let line_len = char_len(&lines[*row]);
            if *col < line_len {
                *col += 1;
            } else if *row + 1 < lines.len() {
                *row += 1;
                *col = 0;
            }
        }
        KeyCode::Up => {
            if *row > 0 {
                *row -= 1;
                *col = (*col).min(char_len(&lines[*row]));
            }
        }
        KeyCode::Down => {
            if *row + 1 < lines.len() {
                *row += 1;
                *col = (*col).min(char_len(&lines[*row]));
            }
        }
        KeyCode::Home => *col = 0,
        KeyCode::End => *col = char_len(&lines[*row]),
        KeyCode::Enter => {
            let split_at = byte_index_at_char(&lines[*row], *col);
            let tail = lines[*row].split_off(split_at);
            *row += 1;
            *col = 0;
            lines.insert(*row, tail);
        }
        KeyCode::Backspace => {
            if *col > 0 {
                let remove_idx = *col - 1;
                remove_char_at(&mut lines[*row], remove_idx);
                *col = remove_idx;
            } else if *row > 0 {
                let current = lines.remove(*row);
                *row -= 1;
                *col = char_len(&lines[*row]);
                lines[*row].push_str(&current);
            }
        }
        KeyCode::Delete => {
            let line_len = char_len(&lines[*row]);
            if *col < line_len {
                remove_char_at(&mut lines[*row], *col);
            } else if *row + 1 < lines.len() {
                let next = lines.remove(*row + 1);
                lines[*row].push_str(&next);
            }
        }
        KeyCode::Char(c) => {
            insert_char_at(&mut lines[*row], *col, c);
            *col += 1;
        }
        _ => {}
    }
}
