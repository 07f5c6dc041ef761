//! Explicit declaration visitor.
//!
//! The visitor decides per node whether the walk descends into the
//! declaration's members. Returning [`Walk::SkipChildren`] prunes the whole
//! subtree, so nested declarations below that node are never visited.

use crate::ast::{Declaration, SourceFile};

/// Whether to descend into a declaration's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    SkipChildren,
}

pub trait Visitor {
    fn visit_declaration(&mut self, decl: &Declaration) -> Walk;
}

/// Walk every declaration of `file` in source order, depth first.
pub fn walk<V: Visitor + ?Sized>(file: &SourceFile, visitor: &mut V) {
    for decl in &file.declarations {
        walk_declaration(decl, visitor);
    }
}

pub fn walk_declaration<V: Visitor + ?Sized>(decl: &Declaration, visitor: &mut V) {
    if visitor.visit_declaration(decl) == Walk::SkipChildren {
        return;
    }
    for member in &decl.members {
        walk_declaration(member, visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    struct Recorder {
        seen: Vec<String>,
        prune: &'static str,
    }

    impl Visitor for Recorder {
        fn visit_declaration(&mut self, decl: &Declaration) -> Walk {
            self.seen.push(decl.name.clone());
            if decl.name == self.prune {
                Walk::SkipChildren
            } else {
                Walk::Continue
            }
        }
    }

    #[test]
    fn test_walk_is_depth_first() {
        let file = parse("enum A { struct B { struct C {} } } struct D {}").unwrap();
        let mut recorder = Recorder {
            seen: Vec::new(),
            prune: "",
        };

        walk(&file, &mut recorder);

        assert_eq!(recorder.seen, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_skip_children_prunes_subtree() {
        let file = parse("enum A { struct B { struct C {} } struct E {} } struct D {}").unwrap();
        let mut recorder = Recorder {
            seen: Vec::new(),
            prune: "B",
        };

        walk(&file, &mut recorder);

        assert_eq!(recorder.seen, vec!["A", "B", "E", "D"]);
    }
}
