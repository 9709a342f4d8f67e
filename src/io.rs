//! Loading graphs from a plain text edge list.
//!
//! The input consists of whitespace-separated tokens:
//!
//! 1. `D` for a directed graph, anything else (typically `G`) for an
//!    undirected one,
//! 2. comma-separated list of vertex ids,
//! 3. any number of edges `(u,v)`, or `(u,v,w)` for weighted graphs.
//!
//! ```text
//! D
//! a,b,c
//! (a,b) (b,c)
//! (c,a)
//! ```
//!
//! # Examples
//!
//! ```
//! use adjgraph::Graph;
//!
//! let graph: Graph<String> = "G 1,2,3 (1,2) (2,3)".parse().unwrap();
//!
//! assert!(!graph.is_directed());
//! assert_eq!(graph.edge_count(), 2);
//!
//! let path = graph.find_shortest_path(&"1".into(), &"3".into()).unwrap();
//! assert_eq!(path, Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]));
//! ```

use std::{io::Read, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::{
    core::weight::Weight,
    graph::{Graph, WeightedGraph},
};

/// The error encountered while loading a graph.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reading input failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing graph type")]
    MissingHeader,
    #[error("missing vertex list")]
    MissingVertices,
    #[error("malformed edge {0:?}")]
    MalformedEdge(String),
    #[error("malformed weight in edge {0:?}")]
    MalformedWeight(String),
    #[error("duplicate vertex {0:?}")]
    DuplicateVertex(String),
    #[error("edge {edge:?} refers to unknown vertex {vertex:?}")]
    UnknownEndpoint { edge: String, vertex: String },
}

struct EdgeList<'a> {
    directed: bool,
    vertices: Vec<&'a str>,
    edges: Vec<(&'a str, Vec<&'a str>)>,
}

fn tokenize(input: &str) -> Result<EdgeList<'_>, ParseError> {
    let mut tokens = input.split_whitespace();

    let directed = tokens.next().ok_or(ParseError::MissingHeader)? == "D";
    let vertices = tokens
        .next()
        .ok_or(ParseError::MissingVertices)?
        .split(',')
        .collect::<Vec<_>>();

    let edges = tokens
        .map(|token| {
            let fields = token
                .strip_prefix('(')
                .and_then(|token| token.strip_suffix(')'))
                .ok_or_else(|| ParseError::MalformedEdge(token.to_owned()))?
                .split(',')
                .collect::<Vec<_>>();

            Ok((token, fields))
        })
        .collect::<Result<_, ParseError>>()?;

    Ok(EdgeList {
        directed,
        vertices,
        edges,
    })
}

fn endpoints(token: &str, fields: &[&str], arity: usize) -> Result<(String, String), ParseError> {
    match fields {
        [src, dst, ..] if fields.len() == arity => Ok((src.to_string(), dst.to_string())),
        _ => Err(ParseError::MalformedEdge(token.to_owned())),
    }
}

fn unknown_endpoint(token: &str, vertex: &str) -> ParseError {
    ParseError::UnknownEndpoint {
        edge: token.to_owned(),
        vertex: vertex.to_owned(),
    }
}

/// Builds an unweighted graph from the edge list format.
pub fn parse_graph(input: &str) -> Result<Graph<String>, ParseError> {
    let list = tokenize(input)?;
    let mut graph = Graph::with_capacity(list.directed, list.vertices.len());

    for id in list.vertices {
        graph
            .add_vertex(id.to_owned())
            .map_err(|error| ParseError::DuplicateVertex(error.id))?;
    }

    for (token, fields) in list.edges {
        let (src, dst) = endpoints(token, &fields, 2)?;
        graph
            .add_edge(&src, &dst)
            .map_err(|error| unknown_endpoint(token, error.missing()))?;
    }

    debug!(
        "parsed graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Builds a weighted graph from the edge list format with `(u,v,w)` edges.
pub fn parse_weighted_graph<W>(input: &str) -> Result<WeightedGraph<String, W>, ParseError>
where
    W: Weight + FromStr,
{
    let list = tokenize(input)?;
    let mut graph = WeightedGraph::with_capacity(list.directed, list.vertices.len());

    for id in list.vertices {
        graph
            .add_vertex(id.to_owned())
            .map_err(|error| ParseError::DuplicateVertex(error.id))?;
    }

    for (token, fields) in list.edges {
        let (src, dst) = endpoints(token, &fields, 3)?;
        let weight = fields[2]
            .parse()
            .map_err(|_| ParseError::MalformedWeight(token.to_owned()))?;

        graph
            .add_edge(&src, &dst, weight)
            .map_err(|error| unknown_endpoint(token, error.missing()))?;
    }

    debug!(
        "parsed weighted graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Reads the whole input and builds an unweighted graph from it.
pub fn read_graph<R: Read>(mut reader: R) -> Result<Graph<String>, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_graph(&input)
}

/// Reads the whole input and builds a weighted graph from it.
pub fn read_weighted_graph<W, R>(mut reader: R) -> Result<WeightedGraph<String, W>, ParseError>
where
    W: Weight + FromStr,
    R: Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_weighted_graph(&input)
}

impl FromStr for Graph<String> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_graph(s)
    }
}

impl<W> FromStr for WeightedGraph<String, W>
where
    W: Weight + FromStr,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weighted_graph(s)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn directed() {
        let graph = parse_graph("D\na,b,c\n(a,b)\n(b,c)\n(c,a)\n").unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.vertex_ids().cloned().collect::<Vec<_>>(), ids(&["a", "b", "c"]));
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_cycle());
        assert_eq!(
            graph.find_shortest_path(&"a".into(), &"c".into()),
            Ok(Some(ids(&["a", "b", "c"])))
        );
    }

    #[test]
    fn undirected() {
        let graph: Graph<String> = "G 1,2,3,4 (1,2) (3,4)".parse().unwrap();

        assert!(!graph.is_directed());
        assert_eq!(
            graph.get_connected_components(),
            vec![ids(&["1", "2"]), ids(&["3", "4"])]
        );
    }

    #[test]
    fn no_edges() {
        let graph = parse_graph("G x").unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn weighted() {
        let graph = parse_weighted_graph::<f64>("G a,b,c (a,b,1.5) (b,c,2) (a,c,4)").unwrap();

        assert_eq!(
            graph.find_shortest_path(&"a".into(), &"c".into()),
            Ok(Some(3.5))
        );
    }

    #[test]
    fn read_from_reader() {
        let graph = read_graph("D a,b (a,b)".as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 1);

        let graph = read_weighted_graph::<u32, _>(&b"G a,b (a,b,7)"[..]).unwrap();
        assert_eq!(graph.minimum_spanning_tree_prim(), Ok(7));
    }

    #[test]
    fn errors() {
        assert_matches!(parse_graph(""), Err(ParseError::MissingHeader));
        assert_matches!(parse_graph("  D \n"), Err(ParseError::MissingVertices));
        assert_matches!(
            parse_graph("D a,b a,b"),
            Err(ParseError::MalformedEdge(token)) if token == "a,b"
        );
        assert_matches!(
            parse_graph("D a,b (a,b,c)"),
            Err(ParseError::MalformedEdge(_))
        );
        assert_matches!(
            parse_graph("D a,b,a"),
            Err(ParseError::DuplicateVertex(id)) if id == "a"
        );
        assert_matches!(
            parse_graph("D a,b (a,z)"),
            Err(ParseError::UnknownEndpoint { vertex, .. }) if vertex == "z"
        );
        assert_matches!(
            parse_weighted_graph::<u32>("D a,b (a,b,-1)"),
            Err(ParseError::MalformedWeight(_))
        );
        assert_matches!(
            parse_weighted_graph::<u32>("D a,b (a,b)"),
            Err(ParseError::MalformedEdge(_))
        );
    }
}
