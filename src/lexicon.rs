// Copyright (C) 2020-2026 Andy Kurnia.

use super::fash;

// whole-word membership, used for perpendicular words. words are tile
// sequences without blank flags.
pub trait Lexicon {
    fn contains(&self, word: &[u8]) -> bool;
}

pub struct SetLexicon {
    words: fash::MyHashSet<Box<[u8]>>,
}

impl SetLexicon {
    pub fn from_machine_words(machine_words: &[Box<[u8]>]) -> Self {
        let mut words = fash::MyHashSet::<Box<[u8]>>::default();
        words.reserve(machine_words.len());
        for word in machine_words {
            words.insert(word.clone());
        }
        Self { words }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for SetLexicon {
    #[inline(always)]
    fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}
