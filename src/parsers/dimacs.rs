use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::basic_types::{Assignment, Formula, Literal, PropositionalVariable};
use crate::result::{LanternError, LanternResult};

/// Reads a DIMACS CNF file. Comment lines start with `c`, the header line is
/// `p cnf <num variables> <num clauses>`, and clauses are sequences of
/// signed nonzero integers terminated by `0`. The terminator is the zero
/// token, not the end of a line: a clause may span several lines and a line
/// may hold several clauses. A lone `0` yields the empty clause.
pub fn parse_cnf_file(file_location: &str) -> LanternResult<Formula> {
    let file_contents = fs::read_to_string(file_location)
        .map_err(|e| LanternError::FileReadingError(e, file_location.to_string()))?;
    parse_cnf(&file_contents, file_location)
}

pub fn parse_cnf(file_contents: &str, source_label: &str) -> LanternResult<Formula> {
    let mut header: Option<(u32, u64)> = None;
    let mut clause_literal_lists: Vec<Vec<Literal>> = vec![];
    let mut pending_clause: Vec<Literal> = vec![];

    for line in file_contents.lines() {
        if line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            header = Some(parse_header(line)?);
            continue;
        }
        let (num_variables, _) = header.ok_or_else(|| {
            LanternError::InvalidDimacsHeader(
                "clause data encountered before the 'p cnf' line".to_string(),
            )
        })?;

        for token in line.split_whitespace() {
            let raw_literal = token.parse::<i64>().map_err(|_| {
                LanternError::InvalidDimacsHeader(format!("unexpected token '{token}'"))
            })?;

            if raw_literal == 0 {
                clause_literal_lists.push(std::mem::take(&mut pending_clause));
            } else {
                if raw_literal.unsigned_abs() > num_variables as u64 {
                    return Err(LanternError::LiteralOutOfBounds {
                        literal: raw_literal,
                        num_variables,
                    });
                }
                pending_clause.push(Literal::from_dimacs(raw_literal as i32));
            }
        }
    }

    let (num_variables, num_declared_clauses) = header.ok_or_else(|| {
        LanternError::InvalidDimacsHeader("no 'p cnf' line found".to_string())
    })?;

    if !pending_clause.is_empty() {
        warn!("The last clause is missing its 0 terminator, accepting it as-is.");
        clause_literal_lists.push(pending_clause);
    }

    //the declared clause count is informational only, the clauses actually
    //  read are authoritative
    if num_declared_clauses != clause_literal_lists.len() as u64 {
        warn!(
            "Header declares {} clauses but {} were read.",
            num_declared_clauses,
            clause_literal_lists.len()
        );
    }

    debug!("Read formula '{}'", source_label);
    debug!("Number of variables: {}", num_variables);
    debug!("Number of clauses: {}", clause_literal_lists.len());

    Ok(Formula::new(
        num_variables,
        clause_literal_lists,
        source_label.to_string(),
    ))
}

fn parse_header(line: &str) -> LanternResult<(u32, u64)> {
    let invalid = || LanternError::InvalidDimacsHeader(line.to_string());

    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("p") || tokens.next() != Some("cnf") {
        return Err(invalid());
    }
    let num_variables = tokens
        .next()
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let num_clauses = tokens
        .next()
        .and_then(|t| t.parse::<u64>().ok())
        .ok_or_else(invalid)?;
    if tokens.next().is_some() {
        return Err(invalid());
    }
    Ok((num_variables, num_clauses))
}

pub fn write_cnf_file(formula: &Formula, file_location: &str) -> LanternResult<()> {
    let mut file = fs::File::create(file_location)?;
    writeln!(file, "c {}", formula.source_label())?;
    writeln!(
        file,
        "p cnf {} {}",
        formula.num_variables(),
        formula.num_clauses()
    )?;
    for clause in formula.clauses() {
        writeln!(file, "{}", clause)?;
    }
    Ok(())
}

/// Renders the `v` line of a witness: the signed index of every set variable
/// in increasing variable order, terminated by `0`. Unset variables are
/// omitted.
pub fn stringify_solution(assignment: &Assignment) -> String {
    let mut rendered = String::from("v");
    for index in 1..=assignment.num_variables() {
        let variable = PropositionalVariable::new(index);
        if assignment.contains(variable) {
            rendered.push(' ');
            rendered.push_str(
                &assignment
                    .get_assignment_literal(variable)
                    .to_dimacs()
                    .to_string(),
            );
        }
    }
    rendered.push_str(" 0");
    rendered
}

pub fn write_solution_file(
    file_location: &str,
    assignment: &Assignment,
    source_label: &str,
    elapsed_seconds: f64,
    num_nodes_explored: u64,
) -> LanternResult<()> {
    let mut file = fs::File::create(file_location)?;
    writeln!(file, "c Solution for {}", source_label)?;
    writeln!(file, "c Time: {:.3}s", elapsed_seconds)?;
    writeln!(file, "c Nodes: {}", num_nodes_explored)?;
    writeln!(file, "{}", stringify_solution(assignment))?;
    Ok(())
}

/// Reads a solution file back into an assignment over `num_variables`
/// variables: comment lines are skipped and every `v` line contributes its
/// literals. Literals referring to variables outside the range are ignored.
pub fn parse_solution_file(
    file_location: &str,
    num_variables: u32,
) -> LanternResult<Assignment> {
    let file_contents = fs::read_to_string(file_location)
        .map_err(|e| LanternError::FileReadingError(e, file_location.to_string()))?;
    Ok(parse_solution(&file_contents, num_variables))
}

pub fn parse_solution(file_contents: &str, num_variables: u32) -> Assignment {
    let mut assignment = Assignment::new(num_variables);
    for line in file_contents.lines() {
        let Some(literal_tokens) = line.strip_prefix("v ") else {
            continue;
        };
        for token in literal_tokens.split_whitespace() {
            let Ok(raw_literal) = token.parse::<i32>() else {
                continue;
            };
            if raw_literal == 0 {
                break;
            }
            let literal = Literal::from_dimacs(raw_literal);
            assignment.assign(literal.get_propositional_variable(), literal.is_positive());
        }
    }
    assignment
}

/// Projects a witness for a reduced formula back onto the original variable
/// range: literals of auxiliary variables are dropped, everything else is
/// kept as-is.
pub fn project_solution(assignment: &Assignment, num_original_variables: u32) -> Assignment {
    let mut projected = Assignment::new(num_original_variables);
    for index in 1..=num_original_variables {
        let variable = PropositionalVariable::new(index);
        if assignment.contains(variable) {
            projected.assign(variable, assignment.get_value(variable));
        }
    }
    projected
}

/// Output path of a reduced formula: `foo.cnf` becomes `foo.3sat.cnf`, any
/// other name simply gains the suffix.
pub fn reduced_file_location(file_location: &str) -> String {
    match file_location.strip_suffix(".cnf") {
        Some(stem) => format!("{stem}.3sat.cnf"),
        None => format!("{file_location}.3sat.cnf"),
    }
}

/// Collects the `.cnf` files to process: a single file is taken as given, a
/// directory is walked non-recursively in lexicographic order. Previously
/// reduced `.3sat.cnf` outputs can be skipped so that reduction does not
/// consume its own results.
pub fn collect_cnf_files(
    file_location: &str,
    skip_reduced_outputs: bool,
) -> LanternResult<Vec<String>> {
    let path = Path::new(file_location);
    if path.is_file() {
        return Ok(vec![file_location.to_string()]);
    }
    if !path.is_dir() {
        return Err(LanternError::MissingFileError);
    }

    let mut cnf_files: Vec<String> = vec![];
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !entry_path.is_file() || !name.ends_with(".cnf") {
            continue;
        }
        if skip_reduced_outputs && name.ends_with(".3sat.cnf") {
            continue;
        }
        cnf_files.push(entry_path.to_string_lossy().into_owned());
    }
    cnf_files.sort();
    Ok(cnf_files)
}
