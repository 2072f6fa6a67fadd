use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionMode {
    /// Opening an entry closes whichever one was open.
    SingleOpen,
    MultiOpen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionState {
    Single(Option<usize>),
    Multi(BTreeSet<usize>),
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        match mode {
            AccordionMode::SingleOpen => AccordionState::Single(None),
            AccordionMode::MultiOpen => AccordionState::Multi(BTreeSet::new()),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        match self {
            AccordionState::Single(open) => *open == Some(index),
            AccordionState::Multi(open) => open.contains(&index),
        }
    }

    pub fn toggle(&mut self, index: usize) {
        match self {
            AccordionState::Single(open) => {
                *open = if *open == Some(index) { None } else { Some(index) };
            }
            AccordionState::Multi(open) => {
                if !open.remove(&index) {
                    open.insert(index);
                }
            }
        }
    }
}

pub struct Toggle(pub usize);

impl Reducible for AccordionState {
    type Action = Toggle;

    fn reduce(self: Rc<Self>, Toggle(index): Toggle) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(index);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_open_keeps_at_most_one() {
        let mut faq = AccordionState::new(AccordionMode::SingleOpen);
        faq.toggle(1);
        assert!(faq.is_open(1));

        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn single_open_toggle_closes_open_entry() {
        let mut faq = AccordionState::new(AccordionMode::SingleOpen);
        faq.toggle(2);
        faq.toggle(2);
        assert_eq!(faq, AccordionState::Single(None));
    }

    #[test]
    fn multi_open_entries_are_independent() {
        let mut faq = AccordionState::new(AccordionMode::MultiOpen);
        faq.toggle(0);
        faq.toggle(4);
        assert!(faq.is_open(0) && faq.is_open(4));

        faq.toggle(0);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(4));
    }

    #[test]
    fn reducer_leaves_previous_state_untouched() {
        let before = Rc::new(AccordionState::new(AccordionMode::SingleOpen));
        let after = before.clone().reduce(Toggle(0));
        assert!(after.is_open(0));
        assert!(!before.is_open(0));
    }
}
