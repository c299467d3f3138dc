use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Register, Section};
use crate::store::HarpStore;

pub fn run<S: HarpStore>(store: &mut S, section: Section, registers: &[Register]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for register in registers {
        if store.remove(section, *register)? {
            result.add_message(CmdMessage::success(format!("Cleared harp {}.", register)));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Harp {} was already empty.",
                register
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_present_and_warns_on_missing() {
        let mut store = StoreFixture::new()
            .with_harp(Section::Search, 'a', "foo")
            .store;

        let result = run(
            &mut store,
            Section::Search,
            &[Register::new('a'), Register::new('b')],
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(store.get(Section::Search, Register::new('a')).unwrap(), None);
    }

    #[test]
    fn only_touches_the_given_section() {
        let mut store = StoreFixture::new()
            .with_harp(Section::Search, 'a', "local")
            .with_harp(Section::GlobalSearch, 'a', "f\u{7f}global")
            .store;

        run(&mut store, Section::GlobalSearch, &[Register::new('a')]).unwrap();
        assert!(store.get(Section::Search, Register::new('a')).unwrap().is_some());
    }
}
