//! Editable card state: display name, avatar and roles.

use crate::avatar::AvatarSlot;
use crate::roles::RoleSet;

/// Name the card shows when the field is empty.
pub const DEFAULT_DISPLAY_NAME: &str = "Ansh";

/// Everything the user can change about a card.
#[derive(Debug, Clone)]
pub struct CardForm {
    pub name: String,
    pub roles: RoleSet,
    pub avatar: AvatarSlot,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            name: DEFAULT_DISPLAY_NAME.to_string(),
            roles: RoleSet::initial(),
            avatar: AvatarSlot::new(),
        }
    }
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form preloaded with `name`.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Store the name exactly as typed.
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    /// Name shown on the card, falling back when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_stored_verbatim() {
        let mut form = CardForm::new();
        form.set_name("  Ansh \u{1F680} ");
        assert_eq!(form.name, "  Ansh \u{1F680} ");
        assert_eq!(form.display_name(), "  Ansh \u{1F680} ");
    }

    #[test]
    fn empty_name_displays_default() {
        let mut form = CardForm::new();
        form.set_name("");
        assert_eq!(form.name, "");
        assert_eq!(form.display_name(), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn default_form_has_no_avatar() {
        let form = CardForm::default();
        assert!(!form.avatar.is_set());
        assert_eq!(form.roles, RoleSet::initial());
    }
}
