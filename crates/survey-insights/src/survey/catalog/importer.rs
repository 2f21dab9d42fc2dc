use super::{Question, QuestionCatalog, QuestionCategory};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Failure while loading a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {id} has unknown category '{category}'")]
    UnknownCategory { id: u32, category: String },
    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
    #[error("question {0} has no text")]
    MissingText(u32),
}

/// Loads question catalogs from CSV exports with `id,category,type,text,options`
/// columns. Options are `|`-separated.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<QuestionCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut questions = Vec::new();

        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            if !seen.insert(row.id) {
                return Err(CatalogImportError::DuplicateId(row.id));
            }
            questions.push(row.into_question()?);
        }

        Ok(QuestionCatalog::new(questions))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    category: String,
    #[serde(rename = "type")]
    kind: String,
    text: String,
    #[serde(default, deserialize_with = "split_options")]
    options: Vec<String>,
}

impl CatalogRow {
    fn into_question(self) -> Result<Question, CatalogImportError> {
        let category = QuestionCategory::parse(&self.category).ok_or_else(|| {
            CatalogImportError::UnknownCategory {
                id: self.id,
                category: self.category.clone(),
            }
        })?;

        if self.text.trim().is_empty() {
            return Err(CatalogImportError::MissingText(self.id));
        }

        Ok(Question {
            id: self.id,
            text: self.text,
            category,
            kind: self.kind,
            options: self.options,
        })
    }
}

fn split_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| {
            value
                .split('|')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,category,type,text,options\n";

    #[test]
    fn imports_rows_with_options() {
        let csv = format!(
            "{HEADER}1,personality_trait,extraversion,I am outgoing and enjoy being with people.,Strongly Disagree|Disagree|Neutral|Agree|Strongly Agree\n\
2,learning_style,visual,\"I remember things better when I see diagrams, charts, or visual aids.\",\n"
        );
        let catalog = CatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(1).expect("question 1");
        assert_eq!(first.category, QuestionCategory::PersonalityTrait);
        assert_eq!(first.kind, "extraversion");
        assert_eq!(first.options.len(), 5);
        assert_eq!(first.options[4], "Strongly Agree");

        let second = catalog.get(2).expect("question 2");
        assert_eq!(
            second.text,
            "I remember things better when I see diagrams, charts, or visual aids."
        );
        assert!(second.options.is_empty());
    }

    #[test]
    fn rejects_unknown_categories() {
        let csv = format!("{HEADER}7,astrology,sun_sign,What is your sign?,\n");
        match CatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::UnknownCategory { id, category }) => {
                assert_eq!(id, 7);
                assert_eq!(category, "astrology");
            }
            other => panic!("expected unknown category, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let csv = format!(
            "{HEADER}3,personality_trait,openness,I worry a lot.,\n3,personality_trait,openness,I get nervous easily.,\n"
        );
        assert!(matches!(
            CatalogImporter::from_reader(Cursor::new(csv)),
            Err(CatalogImportError::DuplicateId(3))
        ));
    }

    #[test]
    fn rejects_blank_question_text() {
        let csv = format!("{HEADER}9,personality_trait,openness,,\n");
        assert!(matches!(
            CatalogImporter::from_reader(Cursor::new(csv)),
            Err(CatalogImportError::MissingText(9))
        ));
    }

    #[test]
    fn malformed_ids_surface_as_csv_errors() {
        let csv = format!("{HEADER}abc,personality_trait,openness,Text,\n");
        assert!(matches!(
            CatalogImporter::from_reader(Cursor::new(csv)),
            Err(CatalogImportError::Csv(_))
        ));
    }
}
