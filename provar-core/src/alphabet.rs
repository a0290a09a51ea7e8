//! Amino-acid alphabet tables.
//!
//! Translates between one- and three-letter residue codes and exposes the
//! physicochemical property classes used to annotate variant records. The
//! extended alphabet covers the gap (`-`) and stop (`*`) codes that appear
//! in Ensembl residue strings for frameshift and stop-gained variants.

/// Three-letter code for a one-letter residue symbol, including the
/// extended gap/stop symbols. Returns `None` for anything else.
pub fn three_letter(aa: char) -> Option<&'static str> {
    let code = match aa.to_ascii_uppercase() {
        'A' => "Ala",
        'R' => "Arg",
        'N' => "Asn",
        'D' => "Asp",
        'C' => "Cys",
        'E' => "Glu",
        'Q' => "Gln",
        'G' => "Gly",
        'H' => "His",
        'I' => "Ile",
        'L' => "Leu",
        'K' => "Lys",
        'M' => "Met",
        'F' => "Phe",
        'P' => "Pro",
        'S' => "Ser",
        'T' => "Thr",
        'W' => "Trp",
        'Y' => "Tyr",
        'V' => "Val",
        'B' => "Asx",
        'Z' => "Glx",
        'X' => "Xaa",
        'U' => "Sec",
        'O' => "Pyl",
        '-' => "---",
        '*' => "***",
        _ => return None,
    };
    Some(code)
}

/// Inverse of [`three_letter`].
pub fn one_letter(code: &str) -> Option<char> {
    let aa = match code {
        "Ala" => 'A',
        "Arg" => 'R',
        "Asn" => 'N',
        "Asp" => 'D',
        "Cys" => 'C',
        "Glu" => 'E',
        "Gln" => 'Q',
        "Gly" => 'G',
        "His" => 'H',
        "Ile" => 'I',
        "Leu" => 'L',
        "Lys" => 'K',
        "Met" => 'M',
        "Phe" => 'F',
        "Pro" => 'P',
        "Ser" => 'S',
        "Thr" => 'T',
        "Trp" => 'W',
        "Tyr" => 'Y',
        "Val" => 'V',
        "Asx" => 'B',
        "Glx" => 'Z',
        "Xaa" => 'X',
        "Sec" => 'U',
        "Pyl" => 'O',
        "---" => '-',
        "***" => '*',
        _ => return None,
    };
    Some(aa)
}

/// Physicochemical property classes for a residue, Taylor-style.
///
/// Non-standard symbols (gap, stop, ambiguity codes) have no classes and
/// yield an empty slice.
pub fn properties(aa: char) -> &'static [&'static str] {
    match aa.to_ascii_uppercase() {
        'A' => &["hydrophobic", "small", "tiny"],
        'R' => &["polar", "charged", "positive"],
        'N' => &["polar", "small"],
        'D' => &["polar", "charged", "negative", "small"],
        'C' => &["hydrophobic", "polar", "small"],
        'E' => &["polar", "charged", "negative"],
        'Q' => &["polar"],
        'G' => &["hydrophobic", "small", "tiny"],
        'H' => &["polar", "charged", "positive", "aromatic"],
        'I' => &["hydrophobic", "aliphatic"],
        'L' => &["hydrophobic", "aliphatic"],
        'K' => &["polar", "charged", "positive"],
        'M' => &["hydrophobic"],
        'F' => &["hydrophobic", "aromatic"],
        'P' => &["small"],
        'S' => &["polar", "small", "tiny"],
        'T' => &["polar", "small"],
        'W' => &["hydrophobic", "polar", "aromatic"],
        'Y' => &["hydrophobic", "polar", "aromatic"],
        'V' => &["hydrophobic", "aliphatic", "small"],
        _ => &[],
    }
}

/// True for the 20 standard residue symbols.
pub fn is_standard(aa: char) -> bool {
    matches!(
        aa.to_ascii_uppercase(),
        'A' | 'R' | 'N' | 'D' | 'C' | 'E' | 'Q' | 'G' | 'H' | 'I' | 'L' | 'K' | 'M' | 'F' | 'P'
            | 'S' | 'T' | 'W' | 'Y' | 'V'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_letter_round_trips() {
        for aa in "ARNDCEQGHILKMFPSTWYVBZXUO".chars() {
            let code = three_letter(aa).unwrap();
            assert_eq!(one_letter(code), Some(aa));
        }
        assert_eq!(three_letter('-'), Some("---"));
        assert_eq!(three_letter('*'), Some("***"));
        assert_eq!(three_letter('1'), None);
    }

    #[test]
    fn properties_of_standard_residues() {
        assert!(properties('G').contains(&"tiny"));
        assert!(properties('R').contains(&"positive"));
        assert!(properties('W').contains(&"aromatic"));
        assert!(properties('-').is_empty());
        assert!(properties('*').is_empty());
    }

    #[test]
    fn standard_alphabet_membership() {
        assert!(is_standard('m'));
        assert!(!is_standard('B'));
        assert!(!is_standard('-'));
    }
}
