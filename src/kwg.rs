// Copyright (C) 2020-2024 Andy Kurnia.

use super::error;

// Packed trie node: tile in the top byte, then the accepts and is_end flags,
// then the index of the first child in the arena (0 if none).
#[derive(Clone, Copy)]
pub struct Node(u32);

impl Node {
    #[inline(always)]
    fn new(tile: u8, accepts: bool, is_end: bool, arc_index: u32) -> Self {
        Node(
            (tile as u32) << 24
                | (accepts as u32) << 23
                | (is_end as u32) << 22
                | (arc_index & 0x3fffff),
        )
    }

    #[inline(always)]
    pub fn tile(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline(always)]
    pub fn accepts(&self) -> bool {
        self.0 & 0x800000 != 0
    }

    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.0 & 0x400000 != 0
    }

    #[inline(always)]
    pub fn arc_index(&self) -> i32 {
        (self.0 & 0x3fffff) as i32
    }
}

// Arena of nodes. Siblings are contiguous and sorted by tile, the last one
// flagged is_end. Node 0 is the root: it spells the empty string.
pub struct Kwg(pub Box<[Node]>);

impl std::ops::Index<i32> for Kwg {
    type Output = Node;

    #[inline(always)]
    fn index(&self, i: i32) -> &Node {
        &self.0[i as usize]
    }
}

pub struct Children<'a> {
    kwg: &'a Kwg,
    p: i32,
}

impl Iterator for Children<'_> {
    type Item = (u8, i32);

    #[inline(always)]
    fn next(&mut self) -> Option<(u8, i32)> {
        if self.p <= 0 {
            return None;
        }
        let node = self.kwg[self.p];
        let ret = (node.tile(), self.p);
        self.p = if node.is_end() { 0 } else { self.p + 1 };
        Some(ret)
    }
}

fn build_siblings(nodes: &mut Vec<Node>, words: &[Box<[u8]>], depth: usize) -> u32 {
    // words share their first depth tiles and are sorted, so the one that
    // ends here (if any) comes first.
    let words = match words.iter().position(|word| word.len() > depth) {
        Some(i) => &words[i..],
        None => return 0,
    };
    let mut groups = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let tile = words[i][depth];
        let mut j = i + 1;
        while j < words.len() && words[j][depth] == tile {
            j += 1;
        }
        groups.push((tile, i, j));
        i = j;
    }
    let first = nodes.len();
    nodes.resize(first + groups.len(), Node(0));
    let num_groups = groups.len();
    for (k, (tile, i, j)) in groups.into_iter().enumerate() {
        let group = &words[i..j];
        let accepts = group[0].len() == depth + 1;
        let arc_index = build_siblings(nodes, group, depth + 1);
        nodes[first + k] = Node::new(tile, accepts, k + 1 == num_groups, arc_index);
    }
    first as u32
}

impl Kwg {
    // words are case-folded; order and duplicates do not matter.
    pub fn from_words<S: AsRef<str>, II: IntoIterator<Item = S>>(words: II) -> error::Returns<Kwg> {
        let mut machine_words = Vec::<Box<[u8]>>::new();
        for s in words {
            let s = s.as_ref().trim();
            if s.is_empty() {
                continue;
            }
            let mut v = Vec::with_capacity(s.len());
            for c in s.chars() {
                if c.is_ascii_alphabetic() {
                    v.push(c.to_ascii_uppercase() as u8);
                } else {
                    return_error!(format!("invalid letter {:?} in {:?}", c, s));
                }
            }
            machine_words.push(v.into_boxed_slice());
        }
        machine_words.sort_unstable();
        machine_words.dedup();

        let mut nodes = vec![Node(0)];
        let root_arc = build_siblings(&mut nodes, &machine_words, 0);
        if nodes.len() > 0x400000 {
            return_error!(format!("too many trie nodes ({})", nodes.len()));
        }
        nodes[0] = Node::new(0, false, true, root_arc);
        Ok(Kwg(nodes.into_boxed_slice()))
    }

    // one word per line.
    pub fn read(path: &str) -> error::Returns<Kwg> {
        match std::fs::read_to_string(path) {
            Ok(giant_string) => Self::from_words(giant_string.lines()),
            Err(err) => {
                return_error!(format!("cannot open dictionary {:?}: {}", path, err));
            }
        }
    }

    // child of p spelling tile, or -1.
    #[inline(always)]
    pub fn seek(&self, mut p: i32, tile: u8) -> i32 {
        if p >= 0 {
            p = self[p].arc_index();
            if p > 0 {
                loop {
                    let node = self[p];
                    if node.tile() == tile {
                        return p;
                    }
                    if node.is_end() || node.tile() > tile {
                        return -1;
                    }
                    p += 1;
                }
            }
        }
        -1
    }

    #[inline(always)]
    pub fn children(&self, p: i32) -> Children<'_> {
        Children {
            kwg: self,
            p: self[p].arc_index(),
        }
    }

    #[inline(always)]
    pub fn has_children(&self, p: i32) -> bool {
        self[p].arc_index() > 0
    }

    #[inline(always)]
    pub fn accepts(&self, p: i32) -> bool {
        self[p].accepts()
    }

    #[inline(always)]
    pub fn root(&self) -> i32 {
        0
    }

    pub fn find_prefix_bytes(&self, word: &[u8]) -> Option<i32> {
        let mut p = self.root();
        for &tile in word {
            p = self.seek(p, tile.to_ascii_uppercase());
            if p <= 0 {
                return None;
            }
        }
        Some(p)
    }

    #[inline(always)]
    pub fn find_prefix(&self, word: &str) -> Option<i32> {
        self.find_prefix_bytes(word.as_bytes())
    }

    #[inline(always)]
    pub fn is_word(&self, word: &str) -> bool {
        self.find_prefix(word).is_some_and(|p| self.accepts(p))
    }

    pub fn count_words(&self) -> usize {
        fn count_from(kwg: &Kwg, p: i32) -> usize {
            kwg.children(p)
                .map(|(_, q)| kwg.accepts(q) as usize + count_from(kwg, q))
                .sum()
        }
        count_from(self, self.root())
    }
}
