//! EditorCore state machine
//!
//! Owns one editing session: the program tree, the selection, the mode and
//! the pending insertion. Every tree edit replaces `program` with a new
//! root built by [`crate::rewrite`]; a command that turns out to be a no-op
//! leaves the root reference-identical.

use std::mem;
use std::sync::Arc;

use expr_classifier::classify;
use expr_query::{
    collect_variables, find_by_id, find_direct_next_sibling, find_next_sibling_recursive,
    find_previous_sibling_recursive, find_slot, linearize,
};
use expr_types::{empty_program, ExprId, ExprRef, Expression};

use crate::{
    command::EditorCommand, cursor::InsertionCursor, key::Key, mode::EditorMode, rewrite,
    snapshot::EditorSnapshot,
};

/// Outcome from applying a key or command to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreOutcome {
    /// Continue editing (no state change)
    Continue,
    /// State changed (program, selection, mode or insertion)
    Changed,
    /// Request the host to run the program
    RequestRun,
    /// Request the host to show help
    RequestHelp,
}

impl CoreOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            CoreOutcome::Changed
        } else {
            CoreOutcome::Continue
        }
    }
}

/// Editor core state machine
#[derive(Debug, Clone)]
pub struct EditorCore {
    program: ExprRef,
    selection: Option<ExprId>,
    mode: EditorMode,
    cursor: Option<InsertionCursor>,
    insertion_text: String,
}

impl EditorCore {
    /// Create an editor over `program` with the root selected
    pub fn new(program: ExprRef) -> Self {
        Self {
            selection: Some(program.id().clone()),
            program,
            mode: EditorMode::Normal,
            cursor: None,
            insertion_text: String::new(),
        }
    }

    /// Apply a key event and return the outcome
    pub fn apply_key(&mut self, key: Key) -> CoreOutcome {
        match self.mode {
            EditorMode::Normal => self.handle_normal_mode(key),
            EditorMode::Insert => self.handle_insert_mode(key),
        }
    }

    /// Apply a command and return the outcome
    pub fn apply_command(&mut self, command: EditorCommand) -> CoreOutcome {
        let changed = match command {
            EditorCommand::SetSelection(id) => self.set_selection(id),
            EditorCommand::MoveNext => self.move_next(),
            EditorCommand::MovePrevious => self.move_previous(),
            EditorCommand::MoveSiblingUp => self.move_sibling_up(),
            EditorCommand::MoveSiblingDown => self.move_sibling_down(),
            EditorCommand::EnterInsertMode => self.enter_insert_mode(),
            EditorCommand::ExitInsertMode => self.exit_insert_mode(),
            EditorCommand::SetInsertionText(text) => self.set_insertion_text(text),
            EditorCommand::CommitInsertion => self.commit_insertion(),
            EditorCommand::DeleteSelected => self.delete_selected(),
            EditorCommand::Run => return CoreOutcome::RequestRun,
            EditorCommand::Help => return CoreOutcome::RequestHelp,
        };
        CoreOutcome::from_changed(changed)
    }

    /// Get a complete snapshot of editor state
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.mode,
            selection: self.selection.clone(),
            cursor: self.cursor.as_ref().map(|c| c.to_string()),
            insertion_text: self.insertion_text.clone(),
            program_ids: linearize(&self.program),
        }
    }

    // Public accessors for rendering/testing
    pub fn program(&self) -> &ExprRef {
        &self.program
    }

    pub fn selection(&self) -> Option<&ExprId> {
        self.selection.as_ref()
    }

    /// The selected node, if the selection is in the tree
    pub fn selected(&self) -> Option<&Expression> {
        find_by_id(&self.program, self.selection.as_ref()?)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn cursor(&self) -> Option<&InsertionCursor> {
        self.cursor.as_ref()
    }

    pub fn insertion_text(&self) -> &str {
        &self.insertion_text
    }

    /// Variable names used anywhere in the program
    pub fn variables(&self) -> Vec<String> {
        collect_variables(&self.program)
    }

    // Private mode handlers

    fn handle_normal_mode(&mut self, key: Key) -> CoreOutcome {
        match EditorCommand::from_normal_key(key) {
            Some(command) => self.apply_command(command),
            None => CoreOutcome::Continue,
        }
    }

    fn handle_insert_mode(&mut self, key: Key) -> CoreOutcome {
        match key {
            Key::Escape => CoreOutcome::from_changed(self.exit_insert_mode()),
            Key::Enter => CoreOutcome::from_changed(self.commit_insertion()),
            Key::Question => CoreOutcome::RequestHelp,
            Key::Backspace => CoreOutcome::from_changed(self.insertion_text.pop().is_some()),
            // Command letters type as themselves in insert mode
            _ => match key.as_char() {
                Some(ch) => {
                    self.insertion_text.push(ch);
                    CoreOutcome::Changed
                }
                None => CoreOutcome::Continue,
            },
        }
    }

    // Commands. Each returns whether any state changed.

    /// Selects `id` if it is in the tree
    pub fn set_selection(&mut self, id: ExprId) -> bool {
        if find_by_id(&self.program, &id).is_none() || self.selection.as_ref() == Some(&id) {
            return false;
        }
        self.selection = Some(id);
        true
    }

    fn select(&mut self, target: Option<ExprId>) -> bool {
        match target {
            Some(id) => {
                self.selection = Some(id);
                true
            }
            None => false,
        }
    }

    fn linear_neighbour(&self, forward: bool) -> Option<ExprId> {
        let current = self.selection.as_ref()?;
        let ids = linearize(&self.program);
        let idx = ids.iter().position(|id| id == current)?;
        let target = if forward {
            idx.checked_add(1)?
        } else {
            idx.checked_sub(1)?
        };
        ids.get(target).cloned()
    }

    pub fn move_next(&mut self) -> bool {
        let target = self.linear_neighbour(true);
        self.select(target)
    }

    pub fn move_previous(&mut self) -> bool {
        let target = self.linear_neighbour(false);
        self.select(target)
    }

    pub fn move_sibling_up(&mut self) -> bool {
        let target = self
            .selection
            .as_ref()
            .and_then(|id| find_previous_sibling_recursive(&self.program, id));
        self.select(target)
    }

    pub fn move_sibling_down(&mut self) -> bool {
        let target = self
            .selection
            .as_ref()
            .and_then(|id| find_next_sibling_recursive(&self.program, id));
        self.select(target)
    }

    /// Enters insert mode with a cursor derived from the selection
    ///
    /// - A selected stack or call is appended to
    /// - A list entry inserts before its next sibling, or appends to the
    ///   parent when it is the last entry
    /// - Anything else inserts before the next sibling found by climbing
    ///   ancestors, falling back to the selection itself
    pub fn enter_insert_mode(&mut self) -> bool {
        let Some(selected_id) = self.selection.clone() else {
            return false;
        };
        let Some(selected) = find_by_id(&self.program, &selected_id) else {
            return false;
        };

        let cursor = if selected.is_list() {
            InsertionCursor::Append(selected_id)
        } else {
            match find_slot(&self.program, &selected_id) {
                Some((parent, _)) if parent.is_list() => {
                    let is_last = parent
                        .list_children()
                        .and_then(|children| children.last())
                        .is_some_and(|last| *last.id() == selected_id);
                    if is_last {
                        InsertionCursor::Append(parent.id().clone())
                    } else {
                        let next = find_direct_next_sibling(&self.program, &selected_id);
                        InsertionCursor::Before(next.unwrap_or(selected_id))
                    }
                }
                _ => {
                    let next = find_next_sibling_recursive(&self.program, &selected_id);
                    InsertionCursor::Before(next.unwrap_or(selected_id))
                }
            }
        };

        self.mode = EditorMode::Insert;
        self.cursor = Some(cursor);
        self.insertion_text.clear();
        true
    }

    pub fn exit_insert_mode(&mut self) -> bool {
        let changed = self.mode != EditorMode::Normal
            || self.cursor.is_some()
            || !self.insertion_text.is_empty();
        self.mode = EditorMode::Normal;
        self.cursor = None;
        self.insertion_text.clear();
        changed
    }

    pub fn set_insertion_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.insertion_text {
            return false;
        }
        self.insertion_text = text;
        true
    }

    /// Classifies the insertion text and splices it in at the cursor
    ///
    /// Text the classifier rejects becomes a variable named by the trimmed
    /// text. Blank text or a missing cursor only leaves insert mode.
    pub fn commit_insertion(&mut self) -> bool {
        let was_editing = self.mode == EditorMode::Insert || self.cursor.is_some();
        let cursor = self.cursor.take();
        let text = mem::take(&mut self.insertion_text);
        self.mode = EditorMode::Normal;

        let trimmed = text.trim();
        let Some(cursor) = cursor.filter(|_| !trimmed.is_empty()) else {
            return was_editing || !text.is_empty();
        };

        let node = classify(trimmed)
            .unwrap_or_else(|| Expression::variable(trimmed))
            .into_ref();
        let inserted_id = node.id().clone();
        let updated = match &cursor {
            InsertionCursor::Append(container) => {
                rewrite::append_child(&self.program, container, node)
            }
            InsertionCursor::Before(sibling) => {
                rewrite::insert_before(&self.program, sibling, node)
            }
        };

        if !Arc::ptr_eq(&updated, &self.program) {
            self.program = updated;
            self.selection = Some(inserted_id);
        }
        true
    }

    /// Deletes the selected node unless it is the root or fills a
    /// required slot
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.as_ref() else {
            return false;
        };
        if id == self.program.id() {
            return false;
        }
        let updated = rewrite::remove_node(&self.program, id);
        if Arc::ptr_eq(&updated, &self.program) {
            return false;
        }
        self.program = updated;
        // First id in linear order is always the root
        self.selection = Some(self.program.id().clone());
        true
    }

    /// Appends `argument` to the call `function_id`; no-op for other nodes
    pub fn append_argument(&mut self, function_id: &ExprId, argument: Expression) -> bool {
        let updated = rewrite::append_argument(&self.program, function_id, argument.into_ref());
        if Arc::ptr_eq(&updated, &self.program) {
            return false;
        }
        self.program = updated;
        true
    }

    pub fn can_append_argument(&self, function_id: &ExprId) -> bool {
        matches!(
            find_by_id(&self.program, function_id),
            Some(Expression::FunctionCall { .. })
        )
    }

    /// Replaces the program wholesale and selects its root
    pub fn load_program(&mut self, program: ExprRef) {
        *self = Self::new(program);
    }
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(empty_program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expr_types::{sample_program, BooleanOperator, Value};

    fn id(s: &str) -> ExprId {
        ExprId::new(s)
    }

    fn sample_editor() -> EditorCore {
        EditorCore::new(sample_program())
    }

    fn select(editor: &mut EditorCore, target: &str) {
        assert!(editor.set_selection(id(target)) || editor.selection() == Some(&id(target)));
    }

    fn type_text(editor: &mut EditorCore, text: &str) {
        for byte in text.bytes() {
            let key = Key::from_ascii(byte).unwrap();
            editor.apply_key(key);
        }
    }

    #[test]
    fn test_new_editor() {
        let editor = EditorCore::default();
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert_eq!(editor.selection(), Some(editor.program().id()));
        assert!(editor.cursor().is_none());
        assert_eq!(editor.program().list_children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_move_next_walks_linear_order() {
        let mut editor = sample_editor();
        let ids = linearize(editor.program());
        for expected in ids.iter().skip(1) {
            assert_eq!(editor.apply_key(Key::L), CoreOutcome::Changed);
            assert_eq!(editor.selection(), Some(expected));
        }
        // Last id: no-op
        assert_eq!(editor.apply_key(Key::Right), CoreOutcome::Continue);
        assert_eq!(editor.selection(), ids.last());
    }

    #[test]
    fn test_move_previous_walks_back() {
        let mut editor = sample_editor();
        assert_eq!(editor.apply_key(Key::H), CoreOutcome::Continue);
        select(&mut editor, "5");
        editor.apply_key(Key::Left);
        assert_eq!(editor.selection(), Some(&id("4")));
    }

    #[test]
    fn test_sibling_moves() {
        let mut editor = sample_editor();
        select(&mut editor, "1");
        editor.apply_key(Key::J);
        assert_eq!(editor.selection(), Some(&id("3")));
        editor.apply_key(Key::K);
        assert_eq!(editor.selection(), Some(&id("1")));

        // Last statement in the loop body climbs out to the next root entry
        select(&mut editor, "12");
        editor.apply_key(Key::Down);
        assert_eq!(editor.selection(), Some(&id("16")));

        // First root entry has nothing above it
        select(&mut editor, "1");
        assert_eq!(editor.apply_key(Key::Up), CoreOutcome::Continue);
    }

    #[test]
    fn test_set_selection_ignores_unknown_ids() {
        let mut editor = sample_editor();
        assert!(!editor.set_selection(id("nope")));
        assert_eq!(editor.selection(), Some(&id("0")));
    }

    #[test]
    fn test_insert_cursor_on_container() {
        let mut editor = sample_editor();
        editor.apply_key(Key::A);
        assert_eq!(editor.mode(), EditorMode::Insert);
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Append(id("0"))));

        select(&mut editor, "10");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Append(id("10"))));
    }

    #[test]
    fn test_insert_cursor_in_list() {
        let mut editor = sample_editor();
        select(&mut editor, "1");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Before(id("3"))));

        select(&mut editor, "16");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Append(id("0"))));

        // Last argument of a call appends to the call
        select(&mut editor, "15");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Append(id("13"))));
    }

    #[test]
    fn test_insert_cursor_in_fixed_slot() {
        let mut editor = sample_editor();
        // Value of assignment "1": climbs to the next root entry
        select(&mut editor, "2");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Before(id("3"))));

        // Value of the final assignment has nowhere to go
        select(&mut editor, "17");
        editor.enter_insert_mode();
        assert_eq!(editor.cursor(), Some(&InsertionCursor::Before(id("17"))));
    }

    #[test]
    fn test_commit_append_to_root() {
        let mut editor = sample_editor();
        let before = editor.program().list_children().unwrap().to_vec();
        editor.apply_key(Key::A);
        type_text(&mut editor, "print(output)");
        assert_eq!(editor.insertion_text(), "print(output)");
        assert_eq!(editor.apply_key(Key::Enter), CoreOutcome::Changed);

        let after = editor.program().list_children().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        for (old, new) in before.iter().zip(after) {
            assert!(Arc::ptr_eq(old, new));
        }
        let last = after.last().unwrap();
        assert_eq!(editor.selection(), Some(last.id()));
        assert!(matches!(&**last, Expression::FunctionCall { function_name, .. } if function_name == "print"));
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert!(editor.cursor().is_none());
    }

    #[test]
    fn test_commit_not_true_builds_boolean() {
        let mut editor = EditorCore::default();
        editor.enter_insert_mode();
        editor.set_insertion_text("not true");
        editor.commit_insertion();
        match editor.selected() {
            Some(Expression::Boolean {
                operator: BooleanOperator::Not,
                left: Some(left),
                right: None,
                ..
            }) => assert!(matches!(
                &**left,
                Expression::Value { value: Value::Boolean(true), .. }
            )),
            other => panic!("Expected not-expression, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_unclassifiable_falls_back_to_variable() {
        let mut editor = EditorCore::default();
        editor.enter_insert_mode();
        editor.set_insertion_text("  1 +  ");
        editor.commit_insertion();
        assert!(matches!(
            editor.selected(),
            Some(Expression::Variable { variable_name, .. }) if variable_name == "1 +"
        ));
    }

    #[test]
    fn test_commit_before_sibling() {
        let mut editor = sample_editor();
        select(&mut editor, "1");
        editor.enter_insert_mode();
        editor.set_insertion_text("42");
        editor.commit_insertion();
        let entries: Vec<_> = editor
            .program()
            .list_children()
            .unwrap()
            .iter()
            .map(|e| e.id().clone())
            .collect();
        assert_eq!(entries[0], id("1"));
        assert_eq!(Some(&entries[1]), editor.selection());
        assert_eq!(entries[2], id("3"));
    }

    #[test]
    fn test_commit_blank_only_leaves_insert_mode() {
        let mut editor = sample_editor();
        let program = Arc::clone(editor.program());
        editor.enter_insert_mode();
        editor.set_insertion_text("   ");
        assert_eq!(editor.apply_key(Key::Enter), CoreOutcome::Changed);
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert!(Arc::ptr_eq(&program, editor.program()));
        assert_eq!(editor.selection(), Some(&id("0")));
    }

    #[test]
    fn test_commit_before_fixed_slot_keeps_tree() {
        let mut editor = sample_editor();
        let program = Arc::clone(editor.program());
        select(&mut editor, "17");
        editor.enter_insert_mode();
        editor.set_insertion_text("x");
        editor.commit_insertion();
        assert!(Arc::ptr_eq(&program, editor.program()));
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert_eq!(editor.selection(), Some(&id("17")));
    }

    #[test]
    fn test_escape_discards_insertion() {
        let mut editor = sample_editor();
        editor.apply_key(Key::A);
        type_text(&mut editor, "xy");
        editor.apply_key(Key::Backspace);
        assert_eq!(editor.insertion_text(), "x");
        assert_eq!(editor.apply_key(Key::Escape), CoreOutcome::Changed);
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert_eq!(editor.insertion_text(), "");
        assert!(editor.cursor().is_none());
    }

    #[test]
    fn test_command_letters_type_in_insert_mode() {
        let mut editor = EditorCore::default();
        editor.apply_key(Key::A);
        type_text(&mut editor, "hjkladr");
        assert_eq!(editor.insertion_text(), "hjkladr");
        assert_eq!(editor.mode(), EditorMode::Insert);
    }

    #[test]
    fn test_delete_root_is_noop() {
        let mut editor = sample_editor();
        let program = Arc::clone(editor.program());
        assert_eq!(editor.apply_key(Key::D), CoreOutcome::Continue);
        assert!(Arc::ptr_eq(&program, editor.program()));
    }

    #[test]
    fn test_delete_required_slots_is_noop() {
        let mut editor = sample_editor();
        let program = Arc::clone(editor.program());
        for target in ["2", "4", "6", "9", "13", "17"] {
            select(&mut editor, target);
            assert!(!editor.delete_selected(), "deleted {}", target);
            assert!(Arc::ptr_eq(&program, editor.program()));
        }
    }

    #[test]
    fn test_delete_list_entry_selects_root() {
        let mut editor = sample_editor();
        select(&mut editor, "5");
        assert_eq!(editor.apply_key(Key::D), CoreOutcome::Changed);
        assert!(find_by_id(editor.program(), &id("5")).is_none());
        assert!(find_by_id(editor.program(), &id("10")).is_none());
        assert_eq!(editor.selection(), Some(&id("0")));
    }

    #[test]
    fn test_delete_else_branch() {
        let program = Expression::stack(vec![Expression::if_else(
            Expression::value(true).with_id("c"),
            Expression::number(1.0).with_id("t"),
            Some(Expression::number(2.0).with_id("e")),
        )])
        .into_ref();
        let mut editor = EditorCore::new(program);

        select(&mut editor, "t");
        assert!(!editor.delete_selected());
        select(&mut editor, "e");
        assert!(editor.delete_selected());
        assert!(find_by_id(editor.program(), &id("e")).is_none());
        assert!(find_by_id(editor.program(), &id("t")).is_some());
    }

    #[test]
    fn test_delete_function_if_and_boolean_operands_is_noop() {
        // fn f(n) { if n < 2 { 1 } else { 2 } }; a and b; not true
        let program = Expression::stack(vec![
            Expression::function_definition(
                "f",
                vec!["n".to_string()],
                Expression::if_else(
                    Expression::boolean(
                        BooleanOperator::LessThan,
                        Some(Expression::variable("n").with_id("lt_left")),
                        Some(Expression::number(2.0).with_id("lt_right")),
                    )
                    .with_id("if_cond"),
                    Expression::number(1.0).with_id("then"),
                    Some(Expression::number(2.0).with_id("else")),
                )
                .with_id("fn_body"),
            )
            .with_id("fn"),
            Expression::boolean(
                BooleanOperator::And,
                Some(Expression::variable("a").with_id("and_left")),
                Some(Expression::variable("b").with_id("and_right")),
            )
            .with_id("and"),
            Expression::boolean(
                BooleanOperator::Not,
                Some(Expression::value(true).with_id("not_left")),
                None,
            )
            .with_id("not"),
        ])
        .into_ref();
        let mut editor = EditorCore::new(Arc::clone(&program));

        for target in [
            "fn_body", "if_cond", "then", "lt_left", "lt_right", "and_left", "and_right",
            "not_left",
        ] {
            select(&mut editor, target);
            assert_eq!(editor.apply_key(Key::D), CoreOutcome::Continue, "deleted {}", target);
            assert!(Arc::ptr_eq(&program, editor.program()), "rewrote {}", target);
            assert_eq!(editor.selection(), Some(&id(target)));
        }

        select(&mut editor, "else");
        assert!(editor.delete_selected());
        assert!(!Arc::ptr_eq(&program, editor.program()));
    }

    #[test]
    fn test_run_and_help_requests() {
        let mut editor = sample_editor();
        assert_eq!(editor.apply_key(Key::R), CoreOutcome::RequestRun);
        assert_eq!(editor.apply_key(Key::Question), CoreOutcome::RequestHelp);
        editor.apply_key(Key::A);
        assert_eq!(editor.apply_key(Key::Question), CoreOutcome::RequestHelp);
        // `r` types in insert mode
        assert_eq!(editor.apply_key(Key::R), CoreOutcome::Changed);
        assert_eq!(editor.insertion_text(), "r");
    }

    #[test]
    fn test_append_argument() {
        let mut editor = sample_editor();
        assert!(editor.can_append_argument(&id("10")));
        assert!(!editor.can_append_argument(&id("0")));
        assert!(editor.append_argument(&id("10"), Expression::variable("counter")));
        assert!(!editor.append_argument(&id("0"), Expression::variable("counter")));
        let call = find_by_id(editor.program(), &id("10")).unwrap();
        assert_eq!(call.list_children().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_variables() {
        let editor = sample_editor();
        assert_eq!(editor.variables(), vec!["counter", "message", "output"]);
    }

    #[test]
    fn test_load_program_resets_session() {
        let mut editor = sample_editor();
        editor.apply_key(Key::A);
        editor.set_insertion_text("pending");
        let replacement = empty_program();
        editor.load_program(Arc::clone(&replacement));
        assert_eq!(editor.mode(), EditorMode::Normal);
        assert_eq!(editor.insertion_text(), "");
        assert_eq!(editor.selection(), Some(replacement.id()));
    }

    #[test]
    fn test_same_commands_same_snapshot() {
        let trace = [
            EditorCommand::MoveNext,
            EditorCommand::MoveSiblingDown,
            EditorCommand::DeleteSelected,
            EditorCommand::MoveNext,
            EditorCommand::EnterInsertMode,
            EditorCommand::SetInsertionText("\"done\"".to_string()),
        ];
        let mut a = sample_editor();
        let mut b = sample_editor();
        for command in trace {
            a.apply_command(command.clone());
            b.apply_command(command);
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.snapshot().hash(), b.snapshot().hash());
        // "3" was deleted, so the entry after "1" is now the loop
        assert_eq!(a.snapshot().cursor.as_deref(), Some("5"));
    }
}
