use crate::commands::{CmdResult, ListedRecord};
use crate::error::Result;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;
use crate::validate::compile_search_pattern;

/// Lists records in insertion order, optionally filtered by a search input.
///
/// The search input goes through the one safe pattern-compile path: a valid
/// regex matches as a regex, anything else matches as literal text. Both the
/// description and the category are searched.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, search: Option<&str>) -> Result<CmdResult> {
    let mut listed: Vec<ListedRecord> = store
        .get_all()
        .iter()
        .enumerate()
        .map(|(i, record)| ListedRecord {
            position: i + 1,
            record: record.clone(),
        })
        .collect();

    if let Some(input) = search {
        let matcher = compile_search_pattern(input);
        listed.retain(|lr| {
            matcher.matches(&lr.record.description) || matcher.matches(&lr.record.category)
        });
    }

    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::RecordDraft;
    use crate::store::mem_backend::MemBackend;

    fn add_record(store: &mut RecordStore<MemBackend>, description: &str, category: &str) {
        add::run(
            store,
            RecordDraft {
                description: description.to_string(),
                amount: "5".to_string(),
                category: category.to_string(),
                date: "2025-10-14".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn lists_in_insertion_order_with_positions() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add_record(&mut store, "First", "Food");
        add_record(&mut store, "Second", "Fun");
        add_record(&mut store, "Third", "Food");

        let result = run(&store, None).unwrap();
        let descriptions: Vec<_> = result
            .listed_records
            .iter()
            .map(|lr| lr.record.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["First", "Second", "Third"]);
        let positions: Vec<_> = result.listed_records.iter().map(|lr| lr.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn search_filters_by_description_and_category() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add_record(&mut store, "Lunch at cafeteria", "Food");
        add_record(&mut store, "Cinema night", "Fun");

        let result = run(&store, Some("cafeteria")).unwrap();
        assert_eq!(result.listed_records.len(), 1);

        let result = run(&store, Some("fun")).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.description, "Cinema night");
    }

    #[test]
    fn search_keeps_original_positions() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add_record(&mut store, "First", "Food");
        add_record(&mut store, "Second", "Fun");

        let result = run(&store, Some("second")).unwrap();
        assert_eq!(result.listed_records[0].position, 2);
    }

    #[test]
    fn search_accepts_real_regex_syntax() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add_record(&mut store, "Lunch at cafeteria", "Food");
        add_record(&mut store, "Cinema night", "Fun");
        add_record(&mut store, "Bus pass", "Transport");

        let result = run(&store, Some("lunch|cinema")).unwrap();
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn broken_regex_input_degrades_instead_of_erroring() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add_record(&mut store, "Lunch at cafeteria", "Food");

        // "*lunch" is not a valid regex; the literal fallback simply finds
        // no match rather than failing the whole command
        let result = run(&store, Some("*lunch")).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
