//! Keyboard events and the handler tables they are routed through

use std::{collections::HashMap, rc::Rc};

use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key identifier as reported by the host, e.g. `ArrowUp` or `a`
    pub key: String,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub fn down(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: KeyEventKind::Down,
        }
    }

    pub fn up(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: KeyEventKind::Up,
        }
    }
}

/// Callback run for a key, compared by identity when it is added or removed
pub type KeyHandler = Rc<dyn Fn(&KeyEvent, &mut Game)>;

pub fn key_handler<F: Fn(&KeyEvent, &mut Game) + 'static>(f: F) -> KeyHandler {
    Rc::new(f)
}

/// Sets of handlers keyed by key identifier
#[derive(Default)]
pub struct KeyHandlerTable {
    handlers: HashMap<String, Vec<KeyHandler>>,
}

impl KeyHandlerTable {
    /// Returns false when the handler was already registered for the key
    pub fn add(&mut self, key: &str, handler: KeyHandler) -> bool {
        let handlers = self.handlers.entry(key.to_string()).or_default();
        if handlers.iter().any(|known| Rc::ptr_eq(known, &handler)) {
            return false;
        }
        handlers.push(handler);
        true
    }

    /// Removes one handler from the key, or every handler when none is given
    pub fn remove(&mut self, key: &str, handler: Option<&KeyHandler>) {
        match handler {
            None => {
                self.handlers.remove(key);
            }
            Some(handler) => {
                if let Some(handlers) = self.handlers.get_mut(key) {
                    handlers.retain(|known| !Rc::ptr_eq(known, handler));
                }
            }
        }
    }

    /// Handlers registered for the key, cloned so they may mutate the table
    pub fn handlers_for(&self, key: &str) -> Vec<KeyHandler> {
        self.handlers.get(key).cloned().unwrap_or_default()
    }

    pub fn count(&self, key: &str) -> usize {
        self.handlers.get(key).map_or(0, Vec::len)
    }
}
