use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::MetadataRecord;

/// Template key, the record field it is filled from, and whether it is required
pub const TEMPLATE_FIELDS: [(&str, &str, bool); 9] = [
    ("projectName", "name", true),
    ("designerName", "designer", true),
    ("authorName", "copyrightName", true),
    ("authorEmail", "copyrightEmail", true),
    ("copyrightName", "copyrightName", true),
    ("copyrightEmail", "copyrightEmail", true),
    ("copyrightYear", "copyrightYear", true),
    ("RFN", "RFN", false),
    ("description", "description", true),
];

/// Values ready for substitution into project templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateFields {
    pub values: BTreeMap<String, String>,
    /// Required keys without a usable value
    pub missing: Vec<String>,
}

impl TemplateFields {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

fn record_value(record: &MetadataRecord, field: &str) -> Option<String> {
    match field {
        "name" => record.name.clone(),
        "designer" => record.designer.clone(),
        "copyrightName" => record.copyright_name.clone(),
        "copyrightEmail" => Some(record.copyright_email.clone()),
        "copyrightYear" => record.copyright_year.clone(),
        "RFN" => record.reserved_font_name.clone(),
        "description" => record.description.clone(),
        _ => None,
    }
}

/// Map a record onto template keys, trimming values and listing gaps
pub fn template_fields(record: &MetadataRecord) -> TemplateFields {
    let mut fields = TemplateFields::default();
    for (key, field, required) in TEMPLATE_FIELDS {
        let value = record_value(record, field)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if value.is_empty() && required {
            fields.missing.push(key.to_string());
        } else {
            fields.values.insert(key.to_string(), value);
        }
    }
    fields
}
