use std::collections::HashMap;

use crate::ast::{DefinitionId, FunctionId};

/// Names visible at one point of the tree.
#[derive(Debug, Clone, Default)]
pub(crate) struct Frame {
    definitions: HashMap<String, DefinitionId>,
    variables: HashMap<String, FunctionId>,
}

impl Frame {
    pub(crate) fn definition(&self, name: &str) -> Option<DefinitionId> {
        self.definitions.get(name).copied()
    }

    pub(crate) fn variable(&self, name: &str) -> Option<FunctionId> {
        self.variables.get(name).copied()
    }

    pub(crate) fn define(&mut self, name: impl ToString, id: DefinitionId) {
        self.definitions.insert(name.to_string(), id);
    }

    /// Binds a function parameter, returning the function it shadows.
    pub(crate) fn bind(&mut self, name: impl ToString, id: FunctionId) -> Option<FunctionId> {
        self.variables.insert(name.to_string(), id)
    }
}

/// Stack of frames mirroring the nesting of scopes.
///
/// Frames entered at a branch point are copies of the enclosing frame, so
/// bindings added in one branch never leak into a sibling.
#[derive(Debug, Default)]
pub(crate) struct Frames {
    frames: Vec<Frame>,
}

impl Frames {
    /// Enter a frame that starts with nothing in scope
    pub(crate) fn enter_empty(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Enter a copy of the current frame
    pub(crate) fn enter_copy(&mut self) {
        let copy = self.current().cloned().unwrap_or_default();
        self.frames.push(copy);
    }

    /// Enter a prepared frame
    pub(crate) fn enter(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Leave the current frame
    pub(crate) fn leave(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub(crate) fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_reports_the_shadowed_function() {
        let mut frame = Frame::default();
        assert_eq!(frame.bind("x", FunctionId(0)), None);
        assert_eq!(frame.bind("x", FunctionId(1)), Some(FunctionId(0)));
        assert_eq!(frame.variable("x"), Some(FunctionId(1)));
    }

    #[test]
    fn copied_frames_do_not_leak_into_the_enclosing_frame() {
        let mut frames = Frames::default();
        frames.enter_empty();
        frames.current_mut().unwrap().bind("outer", FunctionId(0));

        frames.enter_copy();
        frames.current_mut().unwrap().bind("inner", FunctionId(1));
        assert_eq!(frames.current().unwrap().variable("outer"), Some(FunctionId(0)));
        frames.leave();

        assert_eq!(frames.current().unwrap().variable("inner"), None);
        assert_eq!(frames.depth(), 1);
    }

    #[test]
    fn empty_frames_hide_definitions() {
        let mut frames = Frames::default();
        frames.enter_empty();
        frames.current_mut().unwrap().define("id", DefinitionId(0));
        frames.enter_empty();
        assert_eq!(frames.current().unwrap().definition("id"), None);
        frames.leave();
        assert_eq!(frames.current().unwrap().definition("id"), Some(DefinitionId(0)));
    }
}
