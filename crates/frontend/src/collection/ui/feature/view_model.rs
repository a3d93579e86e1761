use contracts::collection::{present, FeaturedRecord, SearchFacet};
use contracts::enums::SearchTerm;

/// One label/value pair of the facts section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactRow {
    Plain { label: &'static str, value: String },
    Search { label: &'static str, facet: SearchFacet },
}

impl FactRow {
    pub fn label(&self) -> &'static str {
        match self {
            FactRow::Plain { label, .. } | FactRow::Search { label, .. } => *label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    pub src: String,
    pub alt: String,
}

fn plain(rows: &mut Vec<FactRow>, label: &'static str, value: &Option<String>) {
    if let Some(value) = present(value) {
        rows.push(FactRow::Plain {
            label,
            value: value.to_string(),
        });
    }
}

fn search(rows: &mut Vec<FactRow>, term: SearchTerm, value: &Option<String>) {
    if let Some(value) = present(value) {
        rows.push(FactRow::Search {
            label: term.display_name(),
            facet: SearchFacet::from_field(term, value),
        });
    }
}

/// Facts of a record in display order. Absent or empty fields produce no row;
/// people produce one row per entry.
pub fn fact_rows(record: &FeaturedRecord) -> Vec<FactRow> {
    let mut rows = Vec::new();
    plain(&mut rows, "Title", &record.title);
    plain(&mut rows, "Description", &record.description);
    search(&mut rows, SearchTerm::Culture, &record.culture);
    plain(&mut rows, "Style", &record.style);
    search(&mut rows, SearchTerm::Technique, &record.technique);
    search(&mut rows, SearchTerm::Medium, &record.medium);
    plain(&mut rows, "Dimensions", &record.dimensions);
    // Every person gets a row, named or not.
    for person in record.people.iter().flatten() {
        rows.push(FactRow::Search {
            label: SearchTerm::Person.display_name(),
            facet: SearchFacet::new(
                SearchTerm::Person,
                person.displayname.clone().unwrap_or_default(),
            ),
        });
    }
    plain(&mut rows, "Department", &record.department);
    plain(&mut rows, "Division", &record.division);
    plain(&mut rows, "Contact", &record.contact);
    plain(&mut rows, "Credit Line", &record.creditline);
    rows
}

/// One photo per image entry.
///
/// Every photo shows `primaryimageurl`, not the entry's own `baseimageurl`.
pub fn photo_views(record: &FeaturedRecord) -> Vec<PhotoView> {
    let src = record.primaryimageurl.clone().unwrap_or_default();
    let title = record.title.clone().unwrap_or_default();
    record
        .images
        .iter()
        .flatten()
        .map(|image| PhotoView {
            src: src.clone(),
            alt: present(&image.alttext)
                .map(str::to_string)
                .unwrap_or_else(|| title.clone()),
        })
        .collect()
}
