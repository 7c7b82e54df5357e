use std::collections::HashMap;

use super::sl_type::SlType;

/// A lexically-scoped stack of binding frames, searched top-down so inner
/// scopes shadow outer ones. Frames enter/exit in strict LIFO order around
/// blocks, matching one push/pop per `{ ... }`.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    frames: Vec<HashMap<String, SlType>>,
}

impl ScopeStack {
    pub fn new() -> ScopeStack {
        ScopeStack { frames: Vec::new() }
    }

    pub fn enter(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn exit(&mut self) {
        self.frames.pop();
    }

    /// Binds `name` in the innermost open frame. Entering a frame is the
    /// caller's responsibility; binding with no open frame treats the
    /// global frame as implicitly open (mirrors top-level declarations).
    pub fn bind(&mut self, name: impl Into<String>, ty: SlType) {
        if self.frames.is_empty() {
            self.enter();
        }
        self.frames
            .last_mut()
            .expect("just ensured a frame is open")
            .insert(name.into(), ty);
    }

    pub fn lookup(&self, name: &str) -> Option<&SlType> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn contains_in_current(&self, name: &str) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeName;

    fn ty(name: &str) -> SlType {
        SlType::new(TypeName::Named(name.to_owned()), false)
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let mut scopes = ScopeStack::new();
        scopes.enter();
        scopes.bind("x", ty("inteiro32"));
        scopes.enter();
        scopes.bind("x", ty("texto"));
        assert_eq!(scopes.lookup("x"), Some(&ty("texto")));
        scopes.exit();
        assert_eq!(scopes.lookup("x"), Some(&ty("inteiro32")));
    }

    #[test]
    fn exit_drops_its_frame_bindings() {
        let mut scopes = ScopeStack::new();
        scopes.enter();
        scopes.bind("a", ty("inteiro32"));
        scopes.exit();
        assert_eq!(scopes.lookup("a"), None);
    }

    #[test]
    fn contains_in_current_ignores_outer_frames() {
        let mut scopes = ScopeStack::new();
        scopes.enter();
        scopes.bind("a", ty("inteiro32"));
        scopes.enter();
        assert!(!scopes.contains_in_current("a"));
        scopes.bind("a", ty("inteiro32"));
        assert!(scopes.contains_in_current("a"));
    }
}
