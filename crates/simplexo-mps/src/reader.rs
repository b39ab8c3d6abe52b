use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use simplexo_types::{BoundKind, ConsSense, LinearConstraint, Model, VarKind, VariableBound};

use crate::errors::{MpsError, Result};

// Fixed field offsets of the strict MPS format
const NAME_COL: usize = 4;
const FIELD1_NAME_COL: usize = 14;
const FIELD1_VALUE_COL: usize = 24;
const FIELD2_NAME_COL: usize = 39;
const FIELD2_VALUE_COL: usize = 49;
const NAME_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Rows,
    Columns,
    Rhs,
    Ranges,
    Bounds,
    End,
}

fn section_of(line: &str) -> Option<Section> {
    if line.starts_with("ROWS") {
        Some(Section::Rows)
    } else if line.starts_with("COLUMNS") {
        Some(Section::Columns)
    } else if line.starts_with("RHS") {
        Some(Section::Rhs)
    } else if line.starts_with("RANGES") {
        Some(Section::Ranges)
    } else if line.starts_with("BOUNDS") {
        Some(Section::Bounds)
    } else if line.starts_with("ENDATA") {
        Some(Section::End)
    } else {
        None
    }
}

/// Fixed-width field, trimmed; out-of-range offsets read as empty
fn field(line: &str, start: usize, width: usize) -> &str {
    let end = (start + width).min(line.len());
    line.get(start..end).unwrap_or("").trim()
}

fn value_field(line: &str, start: usize, lineno: usize) -> Result<f64> {
    let raw = field(line, start, VALUE_WIDTH);
    raw.parse::<f64>().map_err(|_| MpsError::InvalidFormat {
        line: lineno,
        reason: format!("bad numeric field {:?}", raw),
    })
}

/// Offsets of the one or two (name, value) pairs present on a data line
fn line_pairs(line: &str) -> Vec<(usize, usize)> {
    let mut pairs = vec![(FIELD1_NAME_COL, FIELD1_VALUE_COL)];
    if line.trim_end().len() >= 40 {
        pairs.push((FIELD2_NAME_COL, FIELD2_VALUE_COL));
    }
    pairs
}

/// Read a strict fixed-column MPS file into a [`Model`]
///
/// Only the `ROWS`, `COLUMNS`, `RHS`, `RANGES` and `BOUNDS` sections are
/// interpreted; anything before the first section keyword is ignored, as are
/// blank lines and `*` comments.
pub fn read_mps<P: AsRef<Path>>(path: P) -> Result<Model> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

fn parse<R: BufRead>(input: R) -> Result<Model> {
    let mut section = Section::Preamble;
    let mut obj_name: Option<String> = None;
    let mut row_names: Vec<String> = Vec::new();
    let mut row_senses: Vec<ConsSense> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut col_names: Vec<String> = Vec::new();
    let mut col_index: HashMap<String, usize> = HashMap::new();
    let mut obj_coefs: Vec<(usize, f64)> = Vec::new();
    let mut row_coefs: Vec<(usize, usize, f64)> = Vec::new();
    let mut rhs_values: Vec<(usize, f64)> = Vec::new();
    let mut ranges: Vec<(usize, f64)> = Vec::new();
    let mut bound_lines: Vec<(String, String, Option<f64>, usize)> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        if line.trim().is_empty() || line.starts_with('*') {
            continue;
        }
        if let Some(next) = section_of(&line) {
            section = next;
            if section == Section::End {
                break;
            }
            continue;
        }
        match section {
            Section::Rows => {
                let tag = field(&line, 1, 2);
                let name = field(&line, NAME_COL, NAME_WIDTH).to_string();
                match tag {
                    "N" => {
                        // the first N row names the objective
                        if obj_name.is_none() {
                            obj_name = Some(name);
                        }
                    }
                    "L" | "G" | "E" => {
                        let sense = match tag {
                            "L" => ConsSense::Le,
                            "G" => ConsSense::Ge,
                            _ => ConsSense::Eq,
                        };
                        row_index.insert(name.clone(), row_names.len());
                        row_names.push(name);
                        row_senses.push(sense);
                    }
                    _ => {
                        return Err(MpsError::InvalidFormat {
                            line: lineno,
                            reason: format!("unknown row tag {:?}", tag),
                        })
                    }
                }
            }
            Section::Columns => {
                let var = field(&line, NAME_COL, NAME_WIDTH);
                if var.is_empty() {
                    return Err(MpsError::InvalidFormat {
                        line: lineno,
                        reason: "missing column name".to_string(),
                    });
                }
                let col = match col_index.get(var) {
                    Some(&j) => j,
                    None => {
                        let j = col_names.len();
                        col_index.insert(var.to_string(), j);
                        col_names.push(var.to_string());
                        j
                    }
                };
                for (name_col, value_col) in line_pairs(&line) {
                    let target = field(&line, name_col, NAME_WIDTH);
                    if target.is_empty() {
                        continue;
                    }
                    let value = value_field(&line, value_col, lineno)?;
                    if obj_name.as_deref() == Some(target) {
                        obj_coefs.push((col, value));
                    } else {
                        let row = *row_index
                            .get(target)
                            .ok_or_else(|| MpsError::UnknownRow(target.to_string()))?;
                        row_coefs.push((row, col, value));
                    }
                }
            }
            Section::Rhs | Section::Ranges => {
                for (name_col, value_col) in line_pairs(&line) {
                    let target = field(&line, name_col, NAME_WIDTH);
                    if target.is_empty() {
                        continue;
                    }
                    if obj_name.as_deref() == Some(target) {
                        // constant objective offsets are not modeled
                        continue;
                    }
                    let value = value_field(&line, value_col, lineno)?;
                    let row = *row_index
                        .get(target)
                        .ok_or_else(|| MpsError::UnknownRow(target.to_string()))?;
                    if section == Section::Rhs {
                        rhs_values.push((row, value));
                    } else {
                        ranges.push((row, value));
                    }
                }
            }
            Section::Bounds => {
                let btype = field(&line, 1, 2).to_string();
                let var = field(&line, FIELD1_NAME_COL, NAME_WIDTH).to_string();
                let value = match btype.as_str() {
                    "UP" | "LO" | "FX" => Some(value_field(&line, FIELD1_VALUE_COL, lineno)?),
                    _ => None,
                };
                bound_lines.push((btype, var, value, lineno));
            }
            Section::Preamble | Section::End => {}
        }
    }

    if obj_name.is_none() {
        return Err(MpsError::MissingObjective);
    }

    let n = col_names.len();
    let mut objective = vec![0.0; n];
    for (j, value) in obj_coefs {
        objective[j] = value;
    }

    let mut constraints: Vec<LinearConstraint> = row_names
        .iter()
        .zip(&row_senses)
        .map(|(name, &sense)| LinearConstraint {
            name: name.clone(),
            coef: vec![0.0; n],
            rhs: 0.0,
            sense,
        })
        .collect();
    for (i, j, value) in row_coefs {
        constraints[i].coef[j] = value;
    }
    for (i, value) in rhs_values {
        constraints[i].rhs = value;
    }

    // RANGES: the row becomes the interval [lo, hi], expressed as a >= lo
    // row plus an appended <= hi row with the same coefficients
    for (i, range) in ranges {
        let base = constraints[i].clone();
        let (lo, hi) = match base.sense {
            ConsSense::Le => (base.rhs - range.abs(), base.rhs),
            ConsSense::Ge => (base.rhs, base.rhs + range.abs()),
            ConsSense::Eq => {
                if range >= 0.0 {
                    (base.rhs, base.rhs + range)
                } else {
                    (base.rhs + range, base.rhs)
                }
            }
        };
        constraints[i].sense = ConsSense::Ge;
        constraints[i].rhs = lo;
        let mut upper = base;
        upper.name = format!("{}_rng", constraints[i].name);
        upper.sense = ConsSense::Le;
        upper.rhs = hi;
        constraints.push(upper);
    }

    // BOUNDS: untouched variables keep the default "x >= 0"
    let mut bounds: Vec<VariableBound> = col_names
        .iter()
        .map(|name| VariableBound::lower(name, 0.0))
        .collect();
    for (btype, var, value, lineno) in bound_lines {
        let j = *col_index
            .get(&var)
            .ok_or_else(|| MpsError::UnknownColumn(var.clone()))?;
        apply_bound(&mut bounds[j], &btype, value, lineno)?;
    }

    Ok(Model {
        m: constraints.len(),
        n,
        objective,
        constraints,
        bounds: Some(bounds),
    })
}

fn apply_bound(
    bd: &mut VariableBound,
    btype: &str,
    value: Option<f64>,
    lineno: usize,
) -> Result<()> {
    match (btype, value) {
        ("UP", Some(v)) => {
            bd.ub = v;
            bd.b_kind = match bd.b_kind {
                BoundKind::Lower | BoundKind::Boxed => BoundKind::Boxed,
                _ => BoundKind::Upper,
            };
        }
        ("LO", Some(v)) => {
            bd.lb = v;
            bd.b_kind = match bd.b_kind {
                BoundKind::Upper | BoundKind::Boxed => BoundKind::Boxed,
                _ => BoundKind::Lower,
            };
        }
        ("FX", Some(v)) => {
            bd.lb = v;
            bd.ub = v;
            bd.b_kind = BoundKind::Boxed;
        }
        ("FR", None) => {
            bd.lb = f64::NEG_INFINITY;
            bd.ub = f64::INFINITY;
            bd.b_kind = BoundKind::Free;
        }
        ("MI", None) => {
            bd.lb = f64::NEG_INFINITY;
            bd.b_kind = match bd.b_kind {
                BoundKind::Upper | BoundKind::Boxed => BoundKind::Upper,
                _ => BoundKind::Free,
            };
        }
        ("PL", None) => {
            bd.ub = f64::INFINITY;
            bd.b_kind = match bd.b_kind {
                BoundKind::Lower | BoundKind::Boxed => BoundKind::Lower,
                _ => BoundKind::Free,
            };
        }
        ("BV", None) => {
            bd.lb = 0.0;
            bd.ub = 1.0;
            bd.b_kind = BoundKind::Boxed;
            bd.v_kind = VarKind::Binary;
        }
        _ => {
            return Err(MpsError::InvalidFormat {
                line: lineno,
                reason: format!("unknown bound type {:?}", btype),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    /// Data line with the strict fixed offsets (name 4, fields 14/24, 39/49)
    fn data_line(name: &str, f1: &str, v1: f64, second: Option<(&str, f64)>) -> String {
        let mut line = format!("    {:<8}  {:<8}  {:<12}", name, f1, v1);
        if let Some((f2, v2)) = second {
            line.push_str(&format!("   {:<8}  {:<12}", f2, v2));
        }
        line.push('\n');
        line
    }

    fn row_line(tag: &str, name: &str) -> String {
        format!(" {}  {}\n", tag, name)
    }

    fn bound_line(btype: &str, var: &str, value: Option<f64>) -> String {
        match value {
            Some(v) => format!(" {} {:<8}  {:<8}  {:<12}\n", btype, "BND", var, v),
            None => format!(" {} {:<8}  {:<8}\n", btype, "BND", var),
        }
    }

    fn sample() -> String {
        let mut s = String::new();
        s.push_str("* LP de prueba\n");
        s.push_str("NAME          TESTLP\n");
        s.push_str("ROWS\n");
        s.push_str(&row_line("N", "COST"));
        s.push_str(&row_line("L", "LIM1"));
        s.push_str(&row_line("G", "LIM2"));
        s.push_str(&row_line("E", "MYEQN"));
        s.push_str("COLUMNS\n");
        s.push_str(&data_line("X1", "COST", 1.0, Some(("LIM1", 1.0))));
        s.push_str(&data_line("X1", "LIM2", 1.0, None));
        s.push_str(&data_line("X2", "COST", 2.0, Some(("LIM1", 1.0))));
        s.push_str(&data_line("X2", "MYEQN", -1.0, None));
        s.push_str("RHS\n");
        s.push_str(&data_line("RHS1", "LIM1", 4.0, Some(("LIM2", 1.0))));
        s.push_str(&data_line("RHS1", "MYEQN", 7.0, None));
        s.push_str("BOUNDS\n");
        s.push_str(&bound_line("UP", "X1", Some(4.0)));
        s.push_str(&bound_line("FR", "X2", None));
        s.push_str("ENDATA\n");
        s
    }

    #[test]
    fn test_parse_sections_and_dimensions() {
        let model = parse(Cursor::new(sample())).unwrap();

        assert_eq!(model.n, 2);
        assert_eq!(model.m, 3);
        assert_eq!(model.objective, vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_rows_and_coefficients() {
        let model = parse(Cursor::new(sample())).unwrap();

        assert_eq!(model.constraints[0].name, "LIM1");
        assert_eq!(model.constraints[0].sense, ConsSense::Le);
        assert_eq!(model.constraints[0].coef, vec![1.0, 1.0]);
        assert_eq!(model.constraints[0].rhs, 4.0);

        assert_eq!(model.constraints[1].sense, ConsSense::Ge);
        assert_eq!(model.constraints[1].coef, vec![1.0, 0.0]);
        assert_eq!(model.constraints[1].rhs, 1.0);

        assert_eq!(model.constraints[2].sense, ConsSense::Eq);
        assert_eq!(model.constraints[2].coef, vec![0.0, -1.0]);
        assert_eq!(model.constraints[2].rhs, 7.0);
    }

    #[test]
    fn test_parse_bounds_records() {
        let model = parse(Cursor::new(sample())).unwrap();
        let bounds = model.bounds.unwrap();

        // UP sobre el lb implícito 0 produce una caja [0, 4]
        assert_eq!(bounds[0].name, "X1");
        assert_eq!(bounds[0].b_kind, BoundKind::Boxed);
        assert_eq!(bounds[0].lb, 0.0);
        assert_eq!(bounds[0].ub, 4.0);

        assert_eq!(bounds[1].b_kind, BoundKind::Free);
    }

    #[test]
    fn test_parse_ranges_expand_to_two_rows() {
        let mut s = String::new();
        s.push_str("ROWS\n");
        s.push_str(&row_line("N", "COST"));
        s.push_str(&row_line("L", "CAP"));
        s.push_str(&row_line("G", "FLOOR"));
        s.push_str(&row_line("E", "BAL"));
        s.push_str("COLUMNS\n");
        s.push_str(&data_line("X", "COST", 1.0, Some(("CAP", 1.0))));
        s.push_str(&data_line("X", "FLOOR", 1.0, Some(("BAL", 1.0))));
        s.push_str("RHS\n");
        s.push_str(&data_line("RHS1", "CAP", 10.0, Some(("FLOOR", 2.0))));
        s.push_str(&data_line("RHS1", "BAL", 5.0, None));
        s.push_str("RANGES\n");
        s.push_str(&data_line("RNG", "CAP", 4.0, Some(("FLOOR", 3.0))));
        s.push_str(&data_line("RNG", "BAL", -2.0, None));
        s.push_str("ENDATA\n");

        let model = parse(Cursor::new(s)).unwrap();

        // cada rango añade la fila del lado que faltaba
        assert_eq!(model.m, 6);

        // CAP: [6, 10]
        assert_eq!(model.constraints[0].sense, ConsSense::Ge);
        assert_eq!(model.constraints[0].rhs, 6.0);
        assert_eq!(model.constraints[3].name, "CAP_rng");
        assert_eq!(model.constraints[3].sense, ConsSense::Le);
        assert_eq!(model.constraints[3].rhs, 10.0);

        // FLOOR: [2, 5]
        assert_eq!(model.constraints[1].rhs, 2.0);
        assert_eq!(model.constraints[4].rhs, 5.0);

        // BAL con rango negativo: [3, 5]
        assert_eq!(model.constraints[2].sense, ConsSense::Ge);
        assert_eq!(model.constraints[2].rhs, 3.0);
        assert_eq!(model.constraints[5].sense, ConsSense::Le);
        assert_eq!(model.constraints[5].rhs, 5.0);

        // los coeficientes se comparten entre ambos lados
        assert_eq!(model.constraints[0].coef, model.constraints[3].coef);
    }

    #[test]
    fn test_parse_binary_bound_tags_variable() {
        let mut s = String::new();
        s.push_str("ROWS\n");
        s.push_str(&row_line("N", "COST"));
        s.push_str(&row_line("L", "ROW1"));
        s.push_str("COLUMNS\n");
        s.push_str(&data_line("X", "COST", 1.0, Some(("ROW1", 1.0))));
        s.push_str("RHS\n");
        s.push_str(&data_line("RHS1", "ROW1", 1.0, None));
        s.push_str("BOUNDS\n");
        s.push_str(&bound_line("BV", "X", None));
        s.push_str("ENDATA\n");

        let model = parse(Cursor::new(s)).unwrap();
        let bounds = model.bounds.unwrap();

        assert_eq!(bounds[0].b_kind, BoundKind::Boxed);
        assert_eq!(bounds[0].lb, 0.0);
        assert_eq!(bounds[0].ub, 1.0);
        assert_eq!(bounds[0].v_kind, VarKind::Binary);
    }

    #[test]
    fn test_parse_unknown_row_is_rejected() {
        let mut s = String::new();
        s.push_str("ROWS\n");
        s.push_str(&row_line("N", "COST"));
        s.push_str("COLUMNS\n");
        s.push_str(&data_line("X", "NOROW", 1.0, None));
        s.push_str("ENDATA\n");

        let result = parse(Cursor::new(s));

        assert!(matches!(result, Err(MpsError::UnknownRow(name)) if name == "NOROW"));
    }

    #[test]
    fn test_parse_missing_objective_is_rejected() {
        let mut s = String::new();
        s.push_str("ROWS\n");
        s.push_str(&row_line("L", "ROW1"));
        s.push_str("COLUMNS\n");
        s.push_str(&data_line("X", "ROW1", 1.0, None));
        s.push_str("ENDATA\n");

        let result = parse(Cursor::new(s));

        assert!(matches!(result, Err(MpsError::MissingObjective)));
    }

    #[test]
    fn test_parse_bad_numeric_field_is_rejected() {
        let mut s = String::new();
        s.push_str("ROWS\n");
        s.push_str(&row_line("N", "COST"));
        s.push_str(&row_line("L", "ROW1"));
        s.push_str("COLUMNS\n");
        s.push_str("    X         ROW1      not-a-num\n");
        s.push_str("ENDATA\n");

        let result = parse(Cursor::new(s));

        assert!(matches!(result, Err(MpsError::InvalidFormat { .. })));
    }

    #[test]
    fn test_read_mps_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample().as_bytes()).unwrap();

        let model = read_mps(file.path()).unwrap();

        assert_eq!(model.n, 2);
        assert_eq!(model.m, 3);
    }

    #[test]
    fn test_read_mps_missing_file_is_io_error() {
        let result = read_mps("no-such-file.mps");

        assert!(matches!(result, Err(MpsError::Io(_))));
    }
}
