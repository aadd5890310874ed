//! Text boundary: the three-line parameter format and edge-list
//! serialization.
//!
//! The parameter format is three integers, one per line: degree `d`,
//! lift multiplicity `k`, and a seed where `0` means "do not seed
//! explicitly". The output format is one line per edge `i j` with
//! `i < j`, ascending, no header or trailer.

use std::io::{BufRead, Write};

use crate::error::{XpanderError, XpanderResult};
use crate::graph::LiftedGraph;
use crate::lift::LiftConfig;

/// Parsed three-line generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenSpec {
    pub degree: usize,
    pub lift: usize,
    /// `None` when the input seed was the `0` sentinel.
    pub seed: Option<u64>,
}

impl GenSpec {
    /// Parse `d`, `k` and `seed` from three lines of text.
    pub fn from_reader<R: BufRead>(reader: R) -> XpanderResult<Self> {
        let mut lines = reader.lines();
        let degree: i64 = read_int(&mut lines, "degree")?;
        let lift: i64 = read_int(&mut lines, "lift multiplicity")?;
        let seed: i64 = read_int(&mut lines, "seed")?;

        if degree < 0 || lift < 0 {
            return Err(XpanderError::InvalidInput(
                "degree and lift multiplicity must be non-negative".into(),
            ));
        }
        if seed < 0 {
            return Err(XpanderError::InvalidInput(format!(
                "seed must be non-negative (0 = unseeded), got {seed}"
            )));
        }

        Ok(Self {
            degree: degree as usize,
            lift: lift as usize,
            seed: (seed != 0).then_some(seed as u64),
        })
    }

    /// Turn the request into a lift config (still unvalidated).
    pub fn into_config(self) -> LiftConfig {
        let mut config = LiftConfig::new(self.degree, self.lift);
        config.seed = self.seed;
        config
    }
}

fn read_int<B, T>(lines: &mut std::io::Lines<B>, what: &str) -> XpanderResult<T>
where
    B: BufRead,
    T: std::str::FromStr,
{
    let line = lines
        .next()
        .ok_or_else(|| XpanderError::InvalidInput(format!("missing {what} line")))??;
    line.trim()
        .parse()
        .map_err(|_| XpanderError::InvalidInput(format!("malformed {what}: {line:?}")))
}

/// Write the edge list: one `i j` line per edge, ascending `(i, j)`.
pub fn write_edge_list<W: Write>(graph: &LiftedGraph, writer: &mut W) -> XpanderResult<()> {
    for (i, j) in graph.edges() {
        writeln!(writer, "{i} {j}")?;
    }
    Ok(())
}

/// Rebuild a graph from an edge list produced by [`write_edge_list`].
pub fn read_edge_list<R: BufRead>(
    degree: usize,
    lift: usize,
    reader: R,
) -> XpanderResult<LiftedGraph> {
    let mut edges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(XpanderError::InvalidInput(format!(
                "expected two integers per line, got {line:?}"
            )));
        };
        let i: usize = a
            .parse()
            .map_err(|_| XpanderError::InvalidInput(format!("malformed endpoint: {a:?}")))?;
        let j: usize = b
            .parse()
            .map_err(|_| XpanderError::InvalidInput(format!("malformed endpoint: {b:?}")))?;
        edges.push((i, j));
    }
    LiftedGraph::from_edges(degree, lift, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_gen_spec() {
        let spec = GenSpec::from_reader(Cursor::new("3\n2\n42\n")).unwrap();
        assert_eq!(spec.degree, 3);
        assert_eq!(spec.lift, 2);
        assert_eq!(spec.seed, Some(42));
    }

    #[test]
    fn parse_zero_seed_sentinel() {
        let spec = GenSpec::from_reader(Cursor::new("4\n6\n0\n")).unwrap();
        assert_eq!(spec.seed, None);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let spec = GenSpec::from_reader(Cursor::new("  5 \n 3\n\t7\n")).unwrap();
        assert_eq!((spec.degree, spec.lift, spec.seed), (5, 3, Some(7)));
    }

    #[test]
    fn parse_rejects_missing_lines() {
        assert!(matches!(
            GenSpec::from_reader(Cursor::new("3\n2\n")),
            Err(XpanderError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_rejects_negative_seed() {
        assert!(matches!(
            GenSpec::from_reader(Cursor::new("3\n2\n-7\n")),
            Err(XpanderError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            GenSpec::from_reader(Cursor::new("three\n2\n0\n")),
            Err(XpanderError::InvalidInput(_))
        ));
    }

    #[test]
    fn edge_list_round_trip() {
        let graph = LiftedGraph::from_edges(2, 1, vec![(0, 1), (0, 2), (1, 2)]).unwrap();

        let mut buf = Vec::new();
        write_edge_list(&graph, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "0 1\n0 2\n1 2\n");

        let rebuilt = read_edge_list(2, 1, Cursor::new(buf)).unwrap();
        assert_eq!(rebuilt, graph);
    }

    #[test]
    fn read_edge_list_rejects_malformed_line() {
        assert!(matches!(
            read_edge_list(2, 1, Cursor::new("0 1 2\n")),
            Err(XpanderError::InvalidInput(_))
        ));
        assert!(matches!(
            read_edge_list(2, 1, Cursor::new("0 x\n")),
            Err(XpanderError::InvalidInput(_))
        ));
    }
}
