// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Set operations over sorted, duplicate free slices. Every function here
//! assumes its inputs are sorted ascending.

use std::cmp::Ordering;

pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => {
                c.push(a[ap]);
                ap += 1;
            }
            Ordering::Greater => {
                c.push(b[bp]);
                bp += 1;
            }
            Ordering::Equal => {
                c.push(a[ap]);
                ap += 1;
                bp += 1;
            }
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len().min(b.len()));
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => ap += 1,
            Ordering::Greater => bp += 1,
            Ordering::Equal => {
                c.push(a[ap]);
                ap += 1;
                bp += 1;
            }
        }
    }
    c
}

// Removes the items of b from a. Every item in b must also be in a.
pub fn split_out<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => {
                c.push(a[ap]);
                ap += 1;
            }
            Ordering::Greater => panic!("Tried to remove item that's not in set!"),
            Ordering::Equal => {
                ap += 1;
                bp += 1;
            }
        }
    }
    c.extend_from_slice(&a[ap..]);
    c
}

// True if every item of a is in b.
pub fn is_subset<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    if a.len() > b.len() {
        return false;
    }
    let mut bp = 0;
    for x in a {
        while bp < b.len() && b[bp] < *x {
            bp += 1;
        }
        if bp == b.len() || b[bp] != *x {
            return false;
        }
        bp += 1;
    }
    true
}
