// Copyright (C) 2020-2026 Andy Kurnia.

use super::fash;

// arena-allocated word graph. built as a trie, then merged into a dag by
// compress(). node 0 is the root. arcs are sorted by tile.
struct Node {
    arcs: Vec<(u8, u32)>,
    accepts: bool,
}

pub struct Dawg {
    nodes: Vec<Node>,
}

pub struct CompressionStats {
    pub nodes_before: usize,
    pub nodes_after: usize,
}

impl CompressionStats {
    #[inline(always)]
    pub fn reduction(&self) -> f64 {
        if self.nodes_before == 0 {
            0.0
        } else {
            (self.nodes_before - self.nodes_after) as f64 / self.nodes_before as f64
        }
    }
}

// a perpendicular word incidentally formed by one placed tile. pos is the
// absolute board index of its first letter.
#[derive(Clone, Debug)]
pub struct CrossWord {
    pub pos: i16,
    pub word: Box<[u8]>,
}

pub enum CrossCheck {
    Illegal,
    Open,
    Forms(CrossWord),
}

// signature children are already-resolved identities, never arena indices.
#[derive(Eq, Hash, PartialEq)]
struct Signature {
    accepts: bool,
    arcs: Box<[(u8, u32)]>,
}

fn mark_depths(nodes: &[Node], depths: &mut [i16], p: usize, d: i16) {
    if depths[p] >= d {
        return;
    }
    depths[p] = d;
    for &(_, child) in &nodes[p].arcs {
        mark_depths(nodes, depths, child as usize, d + 1);
    }
}

fn visit_reachable(nodes: &[Node], remap: &mut [u32], order: &mut Vec<u32>, p: usize) {
    if remap[p] != !0 {
        return;
    }
    remap[p] = order.len() as u32;
    order.push(p as u32);
    for &(_, child) in &nodes[p].arcs {
        visit_reachable(nodes, remap, order, child as usize);
    }
}

impl Dawg {
    pub fn from_machine_words(machine_words: &[Box<[u8]>]) -> Dawg {
        let mut nodes = vec![Node {
            arcs: Vec::new(),
            accepts: false,
        }];
        for machine_word in machine_words {
            let mut p = 0usize;
            for &tile in machine_word.iter() {
                let found = nodes[p]
                    .arcs
                    .iter()
                    .find(|&&(t, _)| t == tile)
                    .map(|&(_, child)| child);
                p = match found {
                    Some(child) => child as usize,
                    None => {
                        let child = nodes.len() as u32;
                        nodes.push(Node {
                            arcs: Vec::new(),
                            accepts: false,
                        });
                        let at = nodes[p].arcs.partition_point(|&(t, _)| t < tile);
                        nodes[p].arcs.insert(at, (tile, child));
                        child as usize
                    }
                };
            }
            nodes[p].accepts = true;
        }
        Dawg { nodes }
    }

    #[inline(always)]
    fn arc(&self, p: u32, tile: u8) -> Option<u32> {
        self.nodes[p as usize]
            .arcs
            .iter()
            .find(|&&(t, _)| t == tile)
            .map(|&(_, child)| child)
    }

    pub fn accepts(&self, word: &[u8]) -> bool {
        let mut p = 0u32;
        for &tile in word {
            match self.arc(p, tile & 0x7f) {
                Some(child) => p = child,
                None => return false,
            }
        }
        self.nodes[p as usize].accepts
    }

    // distinct live nodes, visited-set traversal from the root.
    pub fn node_count(&self) -> usize {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![0u32];
        visited[0] = true;
        let mut count = 0;
        while let Some(p) = stack.pop() {
            count += 1;
            for &(_, child) in &self.nodes[p as usize].arcs {
                if !visited[child as usize] {
                    visited[child as usize] = true;
                    stack.push(child);
                }
            }
        }
        count
    }

    // merge structurally equal suffix subgraphs, deepest nodes first, then
    // drop everything unreachable. children always resolve before their
    // parents because every child sits at a strictly greater depth.
    pub fn compress(&mut self) {
        let nodes_len = self.nodes.len();
        let mut depths = vec![-1i16; nodes_len];
        mark_depths(&self.nodes, &mut depths, 0, 0);
        let max_depth = depths.iter().copied().max().unwrap_or(0);
        if max_depth < 0 {
            return;
        }
        let mut by_depth = vec![Vec::new(); (max_depth + 1) as usize];
        for (p, &d) in depths.iter().enumerate() {
            if d >= 0 {
                by_depth[d as usize].push(p as u32);
            }
        }

        let mut reps = vec![!0u32; nodes_len];
        let mut ids = vec![!0u32; nodes_len];
        let mut next_id = 0u32;
        let mut finder = fash::MyHashMap::<Signature, u32>::default();
        for depth in (0..=max_depth).rev() {
            for &p in &by_depth[depth as usize] {
                let p = p as usize;
                let arcs_len = self.nodes[p].arcs.len();
                let mut signature_arcs = Vec::with_capacity(arcs_len);
                for ai in 0..arcs_len {
                    let (tile, child) = self.nodes[p].arcs[ai];
                    let rep = reps[child as usize];
                    self.nodes[p].arcs[ai].1 = rep;
                    signature_arcs.push((tile, ids[rep as usize]));
                }
                let signature = Signature {
                    accepts: self.nodes[p].accepts,
                    arcs: signature_arcs.into_boxed_slice(),
                };
                use std::collections::hash_map::Entry::{Occupied, Vacant};
                match finder.entry(signature) {
                    Occupied(entry) => {
                        reps[p] = *entry.get();
                    }
                    Vacant(entry) => {
                        reps[p] = p as u32;
                        ids[p] = next_id;
                        next_id += 1;
                        entry.insert(p as u32);
                    }
                }
            }
        }

        // defrag: rebuild the arena with only reachable representatives.
        let root = reps[0] as usize;
        let mut remap = vec![!0u32; nodes_len];
        let mut order = Vec::with_capacity(next_id as usize);
        visit_reachable(&self.nodes, &mut remap, &mut order, root);
        let mut new_nodes = Vec::with_capacity(order.len());
        for &p in &order {
            let old = &self.nodes[p as usize];
            new_nodes.push(Node {
                arcs: old
                    .arcs
                    .iter()
                    .map(|&(tile, child)| (tile, remap[child as usize]))
                    .collect(),
                accepts: old.accepts,
            });
        }
        self.nodes = new_nodes;
    }

    pub fn compress_with_stats(&mut self) -> CompressionStats {
        let nodes_before = self.node_count();
        self.compress();
        CompressionStats {
            nodes_before,
            nodes_after: self.node_count(),
        }
    }

    // enumerate accepted words along one board line. line cells are 0 when
    // empty, else a tile (0x80 flag for played blanks). occupied cells force
    // their arc at no rack cost. empty cells branch over arcs backed by the
    // rack tally, spending the blank (tally slot 0) at most once per path.
    // a word is reported only when it ends strictly past the anchor and the
    // next cell does not hold a tile.
    pub fn find_words<CrossCheckFn, FoundFn>(
        &self,
        line: &[u8],
        rack_tally: &mut [u8],
        start: i8,
        anchor: i8,
        min_len: i8,
        max_len: i8,
        cross_check: CrossCheckFn,
        found: FoundFn,
    ) where
        CrossCheckFn: FnMut(i8, u8) -> CrossCheck,
        FoundFn: FnMut(i8, &[u8], &[CrossWord]),
    {
        struct Env<'a, CrossCheckFn, FoundFn> {
            dawg: &'a Dawg,
            line: &'a [u8],
            rack_tally: &'a mut [u8],
            start: i8,
            anchor: i8,
            min_len: i8,
            max_len: i8,
            blanks_used: u8,
            word_buffer: Vec<u8>,
            cross_words: Vec<CrossWord>,
            cross_check: CrossCheckFn,
            found: FoundFn,
        }

        fn step<CrossCheckFn: FnMut(i8, u8) -> CrossCheck, FoundFn: FnMut(i8, &[u8], &[CrossWord])>(
            env: &mut Env<'_, CrossCheckFn, FoundFn>,
            p: u32,
            idx: i8,
        ) {
            let len = idx - env.start;
            if env.dawg.nodes[p as usize].accepts
                && len >= env.min_len
                && len <= env.max_len
                && env.anchor < idx
                && ((idx as usize) >= env.line.len() || env.line[idx as usize] == 0)
            {
                (env.found)(env.start, &env.word_buffer, &env.cross_words);
            }
            if (idx as usize) >= env.line.len() || len >= env.max_len {
                return;
            }
            let cell = env.line[idx as usize];
            if cell != 0 {
                if let Some(child) = env.dawg.arc(p, cell & 0x7f) {
                    env.word_buffer.push(cell);
                    step(env, child, idx + 1);
                    env.word_buffer.pop();
                }
                return;
            }
            for ai in 0..env.dawg.nodes[p as usize].arcs.len() {
                let (tile, child) = env.dawg.nodes[p as usize].arcs[ai];
                let placed = if env.rack_tally[tile as usize] > 0 {
                    env.rack_tally[tile as usize] -= 1;
                    tile
                } else if env.rack_tally[0] > 0 && env.blanks_used == 0 {
                    env.rack_tally[0] -= 1;
                    env.blanks_used = 1;
                    tile | 0x80
                } else {
                    continue;
                };
                match (env.cross_check)(idx, placed) {
                    CrossCheck::Illegal => {}
                    CrossCheck::Open => {
                        env.word_buffer.push(placed);
                        step(env, child, idx + 1);
                        env.word_buffer.pop();
                    }
                    CrossCheck::Forms(cross_word) => {
                        env.cross_words.push(cross_word);
                        env.word_buffer.push(placed);
                        step(env, child, idx + 1);
                        env.word_buffer.pop();
                        env.cross_words.pop();
                    }
                }
                if placed & 0x80 != 0 {
                    env.rack_tally[0] += 1;
                    env.blanks_used = 0;
                } else {
                    env.rack_tally[tile as usize] += 1;
                }
            }
        }

        let mut env = Env {
            dawg: self,
            line,
            rack_tally,
            start,
            anchor,
            min_len,
            max_len,
            blanks_used: 0,
            word_buffer: Vec::with_capacity(line.len()),
            cross_words: Vec::new(),
            cross_check,
            found,
        };
        step(&mut env, 0, start);
    }
}
