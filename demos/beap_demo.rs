//! Demonstration driver for the beap container.
//!
//! Builds the 24-element beap from Ian Munro's "ImpSODA06" slides, probes it
//! for a range of values, then mutates it a little. Uses only the public
//! API; run with `cargo run --example beap_demo`.

use beap::Beap;

const MUNRO: [i32; 24] = [
    72, 68, 63, 44, 62, 55, 33, 22, 32, 51, 13, 18, 21, 19, 31, 11, 12, 14, 17, 9, 13, 3, 2, 10,
];

fn main() {
    let mut beap: Beap<i32> = MUNRO.into_iter().collect();

    println!("beap of {} elements: {:?}", beap.len(), beap.as_slice());
    println!("is_beap: {}", beap.is_beap());
    println!("top: {:?}  bottom: {:?}", beap.peek(), beap.peek_min());

    let found: Vec<i32> = (0..101).filter(|v| beap.contains(v)).collect();
    println!("values found in 0..=100: {found:?}");

    let at = beap.push(54);
    println!("pushed 54, landed at index {at}");

    beap.remove(&33);
    beap.remove(&999); // silently absent
    println!("after erasing 33: len {}, is_beap {}", beap.len(), beap.is_beap());

    print!("drained: ");
    while let Some(v) = beap.pop() {
        print!("{v} ");
    }
    println!();
}
