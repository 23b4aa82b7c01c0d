// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        for _ in 0..std::cmp::min(rack_size.saturating_sub(rack.len()), self.0.len()) {
            rack.push(self.pop().unwrap());
        }
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
