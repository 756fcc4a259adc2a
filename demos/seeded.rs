use skipset::SkipSet;

fn main() {
    let mut a = SkipSet::with_seed(42);
    let mut b = SkipSet::with_seed(42);
    for v in [30, 10, 50, 20, 40] {
        a.insert(v);
        b.insert(v);
    }

    println!("a: {:?}", a);
    println!("b: {:?}", b);
    println!("same seed, same elements, equal sets: {}", a == b);

    println!("find(30) -> {:?}", a.find(&30).value());
    println!("find(99) is end: {}", a.find(&99).is_end());

    a.remove(&30);
    println!("after remove(30): {:?}", a);

    a.clear();
    println!("after clear: len={} {:?}", a.len(), a);
}
