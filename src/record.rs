//! Renders country code records as `codes.push(CountryCode { .. });` literals.
//!
//! The output must match the record syntax already used inside the generated
//! region of `codes.rs`, indentation included.

use crate::table::CountryCodeRecord;

/// Appends the literal for a single record to `out`.
pub fn render_record(record: &CountryCodeRecord<'_>, out: &mut String) {
    out.push_str(&format!(
        concat!(
            "    codes.push(CountryCode {{\n",
            "        alpha2: \"{}\",\n",
            "        alpha3: \"{}\",\n",
            "        name: \"{}\",\n",
            "        num: \"{}\",\n",
            "    }});\n",
        ),
        record.alpha2, record.alpha3, record.name, record.num
    ));
}

/// Renders all records in order into one block of source text.
pub fn render_block(records: &[CountryCodeRecord<'_>]) -> String {
    let mut block = String::new();
    for record in records {
        render_record(record, &mut block);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    #[test]
    fn renders_records_in_input_order() {
        let records = parse_table("Andorra  AD  AND  020\nAngola  AO  AGO  024\n", false).unwrap();
        let block = render_block(&records);

        assert_eq!(
            block,
            concat!(
                "    codes.push(CountryCode {\n",
                "        alpha2: \"AD\",\n",
                "        alpha3: \"AND\",\n",
                "        name: \"Andorra\",\n",
                "        num: \"020\",\n",
                "    });\n",
                "    codes.push(CountryCode {\n",
                "        alpha2: \"AO\",\n",
                "        alpha3: \"AGO\",\n",
                "        name: \"Angola\",\n",
                "        num: \"024\",\n",
                "    });\n",
            )
        );
    }

    #[test]
    fn one_record_per_row() {
        let text = "Andorra  AD  AND  020\nAngola  AO  AGO  024\nAnguilla  AI  AIA  660\n";
        let records = parse_table(text, false).unwrap();
        let block = render_block(&records);

        assert_eq!(block.matches("codes.push(CountryCode {").count(), 3);
        assert!(block.ends_with("    });\n"));
        let andorra = block.find("\"Andorra\"").unwrap();
        let angola = block.find("\"Angola\"").unwrap();
        let anguilla = block.find("\"Anguilla\"").unwrap();
        assert!(andorra < angola && angola < anguilla);
    }

    #[test]
    fn renders_exact_template() {
        let record = CountryCodeRecord {
            name: "Åland Islands",
            alpha2: "AX",
            alpha3: "ALA",
            num: "248",
        };
        let mut out = String::new();
        render_record(&record, &mut out);

        assert_eq!(
            out,
            "    codes.push(CountryCode {\n        alpha2: \"AX\",\n        alpha3: \"ALA\",\n        name: \"Åland Islands\",\n        num: \"248\",\n    });\n"
        );
    }

    #[test]
    fn empty_slice_renders_nothing() {
        assert_eq!(render_block(&[]), "");
    }
}
