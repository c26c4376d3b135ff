//! Interactive entry for form fields not given on the command line.

use std::io::{self, BufRead, Write};

use salary_core::{FormField, FormInput};

/// Asks for every blank field, in validation order.
///
/// Each answer is stored as typed (minus the line ending); trimming and
/// the emptiness check stay with validation. End of input stops prompting
/// and leaves the remaining fields blank.
pub fn prompt_missing<R, W>(
    form: &mut FormInput,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for field in FormField::ORDER {
        if !form.get(field).trim().is_empty() {
            continue;
        }

        write!(output, "{} * ({}): ", field.label(), field.placeholder())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        form.set(field, line.trim_end_matches(['\r', '\n']));
    }
    Ok(())
}

/// True when at least one field still needs input.
pub fn has_missing(form: &FormInput) -> bool {
    FormField::ORDER
        .into_iter()
        .any(|field| form.get(field).trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompts_only_for_blank_fields() {
        let mut form = FormInput {
            company: "Acme".to_string(),
            ctc: "15 LPA".to_string(),
            ..Default::default()
        };
        let mut input = Cursor::new("SDE1\nBangalore\n");
        let mut output = Vec::new();

        prompt_missing(&mut form, &mut input, &mut output).unwrap();

        assert_eq!(form.position, "SDE1");
        assert_eq!(form.location, "Bangalore");
        let shown = String::from_utf8(output).unwrap();
        assert!(!shown.contains("Company Name"));
        assert!(shown.contains("Job Role/Position * (e.g., SDE 1, Associate, Analyst): "));
    }

    #[test]
    fn keeps_inner_whitespace_and_strips_line_endings() {
        let mut form = FormInput::default();
        let mut input = Cursor::new(" Acme Corp \r\nSDE1\n15,00,000\nPune\n");

        prompt_missing(&mut form, &mut input, &mut Vec::new()).unwrap();

        assert_eq!(form.company, " Acme Corp ");
        assert_eq!(form.ctc, "15,00,000");
    }

    #[test]
    fn end_of_input_leaves_remaining_fields_blank() {
        let mut form = FormInput::default();
        let mut input = Cursor::new("Acme\n");

        prompt_missing(&mut form, &mut input, &mut Vec::new()).unwrap();

        assert_eq!(form.company, "Acme");
        assert_eq!(form.position, "");
        assert!(has_missing(&form));
    }

    #[test]
    fn complete_form_has_nothing_missing() {
        let form = FormInput {
            company: "Acme".to_string(),
            position: "SDE1".to_string(),
            ctc: "15 LPA".to_string(),
            location: "Pune".to_string(),
        };

        assert!(!has_missing(&form));
    }
}
