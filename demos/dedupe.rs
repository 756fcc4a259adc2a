use skipset::SkipSet;

fn main() {
    let words = [
        "pear", "apple", "orange", "apple", "banana", "pear", "cherry", "apple",
    ];

    let mut set = SkipSet::new();
    for word in words {
        set.insert(word);
    }

    println!("{} distinct words out of {}:", set.len(), words.len());
    for word in &set {
        println!("  {}", word);
    }

    for probe in ["apple", "mango"] {
        println!("contains {:?}: {}", probe, set.contains(&probe));
    }

    set.remove(&"banana");
    println!("after removing banana: {:?}", set);
}
