use double_vector::DoubleVector;

fn main() -> Result<(), double_vector::DoubleVectorError> {
    println!("--- Basic Usage Example ---");
    let mut v = DoubleVector::new();

    for i in 1..=5 {
        v.push_back(i as f64 * 1.5)?;
        println!("Pushed: {}, len: {}, cap: {}", i as f64 * 1.5, v.len(), v.capacity());
    }

    println!("Elements: {:?}", v);
    println!("at(2) = {}", v.at(2)?);
    if let Err(err) = v.at(10) {
        println!("at(10) failed: {}", err);
    }

    v.shrink_to_fit();
    println!("After shrink_to_fit, cap: {}", v.capacity());

    while let Some(val) = v.pop_back() {
        println!("Popped: {}, len: {}", val, v.len());
    }
    Ok(())
}
