use crate::codec;
use crate::commands::{CmdMessage, CmdResult, ListedHarp};
use crate::directive::SearchDirective;
use crate::error::Result;
use crate::model::Section;
use crate::store::HarpStore;

pub fn run<S: HarpStore>(store: &S, section: Section) -> Result<CmdResult> {
    let harps = store.list(section)?;

    let listed: Vec<ListedHarp> = harps
        .into_iter()
        .map(|harp| {
            let (path, pattern) = match section {
                Section::Search => (None, harp.value),
                Section::GlobalSearch => {
                    let record = codec::decode(&harp.value);
                    let path = record.has_path().then(|| record.path.clone());
                    (path, record.pattern)
                }
            };
            ListedHarp {
                register: harp.register,
                path,
                directive: SearchDirective::parse_stored(&pattern, false),
            }
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No harps set."));
    }
    Ok(result.with_listed(listed))
}
