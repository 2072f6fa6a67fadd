use std::rc::Rc;

use yew::Reducible;

/// Full-screen navigation overlay on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    /// Sent when a navigation link is followed or the close button is hit.
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let menu = Rc::new(MenuState::default());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.open);
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(!menu.open);
    }

    #[test]
    fn close_always_closes() {
        let open = Rc::new(MenuState { open: true });
        assert!(!open.reduce(MenuAction::Close).open);

        let closed = Rc::new(MenuState::default());
        let after = closed.clone().reduce(MenuAction::Close);
        assert!(!after.open);
        assert!(Rc::ptr_eq(&closed, &after));
    }
}
