use core::fmt;

/// A single named bit field of a packed ID, used for debug rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldLayout {
    pub name: &'static str,
    pub bits: u8,
    pub value: u64,
}

/// Renders a packed ID as a boxed table of its fields, MSB first.
///
/// Fields with zero width are skipped.
pub(crate) fn write_bit_layout_debug(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    raw: u64,
    padded: &str,
    fields: &[FieldLayout],
) -> fmt::Result {
    let visible_fields: Vec<_> = fields.iter().filter(|field| field.bits > 0).collect();

    // Compute max width per column: label, dec, hex
    let columns: Vec<usize> = visible_fields
        .iter()
        .map(|field| {
            let label_len = format!("{} ({})", field.name, field.bits).len();
            let dec_len = field.value.to_string().len();
            let hex_len = format!("0x{:x}", field.value).len();
            label_len.max(dec_len).max(hex_len) + 2
        })
        .collect();

    fn center(s: impl ToString, width: usize) -> String {
        let s = s.to_string();
        let pad = width.saturating_sub(s.len());
        let left = pad / 2;
        format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
    }

    fn border(f: &mut fmt::Formatter<'_>, columns: &[usize]) -> fmt::Result {
        write!(f, "        +")?;
        for &w in columns {
            write!(f, "{}+", "-".repeat(w))?;
        }
        writeln!(f)
    }

    writeln!(f, "{type_name} {{")?;
    writeln!(f, "    raw id     : 0x{raw:016x} ({raw})")?;
    writeln!(f, "    padded     : {padded}")?;
    writeln!(f, "    layout     :")?;

    border(f, &columns)?;

    write!(f, "        |")?;
    for (field, &w) in visible_fields.iter().zip(&columns) {
        write!(f, "{}|", center(format!("{} ({})", field.name, field.bits), w))?;
    }
    writeln!(f)?;

    border(f, &columns)?;

    write!(f, "        |")?;
    for (field, &w) in visible_fields.iter().zip(&columns) {
        write!(f, "{}|", center(field.value, w))?;
    }
    writeln!(f)?;

    write!(f, "        |")?;
    for (field, &w) in visible_fields.iter().zip(&columns) {
        write!(f, "{}|", center(format!("0x{:x}", field.value), w))?;
    }
    writeln!(f)?;

    border(f, &columns)?;

    write!(f, "}}")
}
