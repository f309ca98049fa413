use crate::utils::unicode::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};

/// A single-line text input with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.text, self.cursor);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.text, self.cursor);
    }

    pub fn move_word_left(&mut self) {
        self.cursor = prev_word_boundary(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = next_word_boundary(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Description,
    Subtask(usize),
}

/// Transient view-state of the creation form.
///
/// The subtask inputs are an ordered sequence of text buffers owned here,
/// collected explicitly at submission time. Invariant: at least one subtask
/// input is always present, restored after every reset.
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: EditBuffer,
    pub description: EditBuffer,
    pub subtask_inputs: Vec<EditBuffer>,
    pub focus: FormFocus,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: EditBuffer::default(),
            description: EditBuffer::default(),
            subtask_inputs: vec![EditBuffer::default()],
            focus: FormFocus::Title,
        }
    }

    /// Restore the at-least-one-input invariant.
    pub fn ensure_subtask_input(&mut self) {
        if self.subtask_inputs.is_empty() {
            self.subtask_inputs.push(EditBuffer::default());
        }
    }

    /// Append one blank subtask input and move focus to it. There is no
    /// upper bound on the input count.
    pub fn add_subtask_field(&mut self) {
        self.subtask_inputs.push(EditBuffer::default());
        self.focus = FormFocus::Subtask(self.subtask_inputs.len() - 1);
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Title => FormFocus::Description,
            FormFocus::Description => FormFocus::Subtask(0),
            FormFocus::Subtask(i) if i + 1 < self.subtask_inputs.len() => FormFocus::Subtask(i + 1),
            FormFocus::Subtask(_) => FormFocus::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Title => FormFocus::Subtask(self.subtask_inputs.len() - 1),
            FormFocus::Description => FormFocus::Title,
            FormFocus::Subtask(0) => FormFocus::Description,
            FormFocus::Subtask(i) => FormFocus::Subtask(i - 1),
        };
    }

    pub fn active_buffer_mut(&mut self) -> &mut EditBuffer {
        match self.focus {
            FormFocus::Title => &mut self.title,
            FormFocus::Description => &mut self.description,
            FormFocus::Subtask(i) => &mut self.subtask_inputs[i],
        }
    }

    /// Subtask texts in input order, trimmed, blanks discarded.
    pub fn collect_subtasks(&self) -> Vec<String> {
        self.subtask_inputs
            .iter()
            .map(|b| b.trimmed())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Clear everything back to the single-blank-input state.
    pub fn reset(&mut self) {
        self.title = EditBuffer::default();
        self.description = EditBuffer::default();
        self.subtask_inputs.clear();
        self.ensure_subtask_input();
        self.focus = FormFocus::Title;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(buf: &mut EditBuffer, text: &str) {
        for c in text.chars() {
            buf.insert_char(c);
        }
    }

    #[test]
    fn test_new_form_satisfies_single_input_invariant() {
        let form = FormState::new();
        assert_eq!(form.subtask_inputs.len(), 1);
        assert_eq!(form.focus, FormFocus::Title);
    }

    #[test]
    fn test_add_subtask_field_focuses_new_input() {
        let mut form = FormState::new();
        form.add_subtask_field();
        form.add_subtask_field();

        assert_eq!(form.subtask_inputs.len(), 3);
        assert_eq!(form.focus, FormFocus::Subtask(2));
    }

    #[test]
    fn test_collect_discards_blank_inputs_keeps_order() {
        let mut form = FormState::new();
        type_into(&mut form.subtask_inputs[0], "Morning");
        form.add_subtask_field();
        type_into(form.active_buffer_mut(), "   ");
        form.add_subtask_field();
        type_into(form.active_buffer_mut(), " Evening ");

        assert_eq!(form.collect_subtasks(), vec!["Morning", "Evening"]);
    }

    #[test]
    fn test_reset_returns_to_single_blank_input() {
        let mut form = FormState::new();
        type_into(&mut form.title, "Pray");
        form.add_subtask_field();
        form.add_subtask_field();

        form.reset();

        assert_eq!(form.subtask_inputs.len(), 1);
        assert!(form.subtask_inputs[0].text.is_empty());
        assert!(form.title.text.is_empty());
        assert_eq!(form.focus, FormFocus::Title);
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = FormState::new();
        form.add_subtask_field();
        form.focus = FormFocus::Title;

        form.focus_next();
        assert_eq!(form.focus, FormFocus::Description);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Subtask(0));
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Subtask(1));
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Title);

        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Subtask(1));
    }

    #[test]
    fn test_edit_buffer_handles_multibyte_input() {
        let mut buf = EditBuffer::default();
        type_into(&mut buf, "bön");
        assert_eq!(buf.cursor, buf.text.len());

        buf.move_left();
        buf.backspace();
        assert_eq!(buf.text, "bn");
    }

    #[test]
    fn test_edit_buffer_word_movement() {
        let mut buf = EditBuffer::default();
        type_into(&mut buf, "morning prayer");
        buf.move_word_left();
        assert_eq!(buf.cursor, 8);
        buf.move_home();
        assert_eq!(buf.cursor, 0);
        buf.move_word_right();
        assert_eq!(buf.cursor, 8);
        buf.move_end();
        assert_eq!(buf.cursor, buf.text.len());
    }
}
