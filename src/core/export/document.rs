//! Assembly of the four exported sections into one BNGL file

use super::names::{BEGIN_MODEL, BEGIN_PARAMETERS, END_MODEL, END_PARAMETERS};

/// The four text sections produced by one export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnglSections {
    pub parameters: String,
    pub molecule_types: String,
    pub compartments: String,
    pub reaction_rules: String,
}

impl BnglSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a complete `begin model` ... `end model` document
    ///
    /// The parameter lines are wrapped in a parameters block; the other
    /// sections already carry their own begin/end markers.
    pub fn to_document(&self, model_name: Option<&str>) -> String {
        let mut doc = String::with_capacity(
            self.parameters.len()
                + self.molecule_types.len()
                + self.compartments.len()
                + self.reaction_rules.len()
                + 128,
        );

        // every line of the name stays inside a comment
        if let Some(name) = model_name {
            for line in name.split(['\n', '\r']).filter(|l| !l.is_empty()) {
                doc.push_str("# ");
                doc.push_str(line);
                doc.push('\n');
            }
        }

        doc.push_str(BEGIN_MODEL);
        doc.push_str("\n\n");

        doc.push_str(BEGIN_PARAMETERS);
        doc.push('\n');
        doc.push_str(&self.parameters);
        doc.push_str(END_PARAMETERS);
        doc.push_str("\n\n");

        for section in [&self.molecule_types, &self.compartments, &self.reaction_rules] {
            doc.push_str(section);
            doc.push('\n');
        }

        doc.push_str(END_MODEL);
        doc.push('\n');
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_layout() {
        let sections = BnglSections {
            parameters: "  a 1\n".to_string(),
            molecule_types: "begin molecule types\nend molecule types\n".to_string(),
            compartments: "begin compartments\nend compartments\n".to_string(),
            reaction_rules: "begin reaction rules\nend reaction rules\n".to_string(),
        };

        let doc = sections.to_document(Some("toy model"));
        assert_eq!(
            doc,
            "# toy model\n\
             begin model\n\n\
             begin parameters\n  a 1\nend parameters\n\n\
             begin molecule types\nend molecule types\n\n\
             begin compartments\nend compartments\n\n\
             begin reaction rules\nend reaction rules\n\n\
             end model\n"
        );
    }

    #[test]
    fn test_document_without_name() {
        let doc = BnglSections::new().to_document(None);
        assert!(doc.starts_with("begin model\n"));
        assert!(doc.ends_with("end model\n"));
    }

    #[test]
    fn test_document_multiline_name_stays_commented() {
        let doc = BnglSections::new().to_document(Some("toy\nend model\r\nbegin model\rx"));
        assert!(doc.starts_with("# toy\n# end model\n# begin model\n# x\nbegin model\n"));
        assert_eq!(doc.lines().filter(|l| *l == "end model").count(), 1);
        assert_eq!(doc.lines().filter(|l| *l == "begin model").count(), 1);
    }
}
