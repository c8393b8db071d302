//! Role vocabulary and selection state.
//!
//! The vocabulary is a closed enum, so a selection can only ever contain
//! known roles. Selection order is the order roles were switched on.

use std::fmt;

/// Maximum number of chips the card shows.
pub const MAX_DISPLAYED_ROLES: usize = 8;

/// A role tag that can be shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Og,
    SuperOg,
    RealHuman,
    EarlyAdopter,
    BetaTester,
    IdEvangelist,
    MemeMaster,
    Helper247,
}

impl Role {
    /// Every role, in the order the picker lists them.
    pub const ALL: [Role; 8] = [
        Role::Og,
        Role::SuperOg,
        Role::RealHuman,
        Role::EarlyAdopter,
        Role::BetaTester,
        Role::IdEvangelist,
        Role::MemeMaster,
        Role::Helper247,
    ];

    /// Human-readable label shown on toggles and chips.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Og => "OG",
            Role::SuperOg => "Super OG",
            Role::RealHuman => "Real Human",
            Role::EarlyAdopter => "Early Adopter",
            Role::BetaTester => "Beta Tester",
            Role::IdEvangelist => "ID Evangelist",
            Role::MemeMaster => "Meme Master",
            Role::Helper247 => "24/7 Helper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of selected roles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleSet {
    selected: Vec<Role>,
}

impl RoleSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every role selected, in vocabulary order.
    pub fn all() -> Self {
        Self {
            selected: Role::ALL.to_vec(),
        }
    }

    /// Selection the generator opens with.
    pub fn initial() -> Self {
        Self {
            selected: vec![
                Role::Og,
                Role::RealHuman,
                Role::EarlyAdopter,
                Role::BetaTester,
                Role::IdEvangelist,
                Role::MemeMaster,
            ],
        }
    }

    /// Flip membership of `role`. Newly selected roles go to the end.
    pub fn toggle(&mut self, role: Role) {
        if let Some(pos) = self.selected.iter().position(|r| *r == role) {
            self.selected.remove(pos);
        } else {
            self.selected.push(role);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = Role::ALL.to_vec();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, role: Role) -> bool {
        self.selected.contains(&role)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected roles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.selected.iter().copied()
    }

    /// Roles the card shows: the first eight in insertion order.
    pub fn displayed(&self) -> &[Role] {
        let n = self.selected.len().min(MAX_DISPLAYED_ROLES);
        &self.selected[..n]
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::new();
        for role in iter {
            if !set.contains(role) {
                set.selected.push(role);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let labels: std::collections::HashSet<_> = Role::ALL.iter().map(Role::label).collect();
        assert_eq!(labels.len(), Role::ALL.len());
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut set = RoleSet::new();
        set.toggle(Role::MemeMaster);
        set.toggle(Role::Og);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::MemeMaster, Role::Og]);

        set.toggle(Role::MemeMaster);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::Og]);
    }

    #[test]
    fn reselected_role_moves_to_end() {
        let mut set = RoleSet::initial();
        set.toggle(Role::Og);
        set.toggle(Role::Og);
        assert_eq!(set.iter().last(), Some(Role::Og));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn select_all_uses_vocabulary_order() {
        let mut set = RoleSet::new();
        set.toggle(Role::Helper247);
        set.select_all();
        assert_eq!(set.iter().collect::<Vec<_>>(), Role::ALL.to_vec());
        assert_eq!(set, RoleSet::all());
    }

    #[test]
    fn clear_empties() {
        let mut set = RoleSet::all();
        set.clear();
        assert!(set.is_empty());
        assert!(set.displayed().is_empty());
    }

    #[test]
    fn displayed_caps_at_eight() {
        let set = RoleSet::all();
        assert_eq!(set.displayed().len(), MAX_DISPLAYED_ROLES);
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let set: RoleSet = [Role::Og, Role::Og, Role::BetaTester].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn initial_selection_matches_default_card() {
        let set = RoleSet::initial();
        assert!(set.contains(Role::Og));
        assert!(!set.contains(Role::SuperOg));
        assert!(!set.contains(Role::Helper247));
    }
}
