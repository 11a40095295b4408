use double_vector::DoubleVector;

fn main() -> Result<(), double_vector::DoubleVectorError> {
    println!("--- Cursor Example ---");
    let mut v = DoubleVector::try_from(&[3.0, 1.0, 4.0, 1.0, 5.0][..])?;

    print!("Forward: ");
    let mut it = v.begin();
    while it != v.end() {
        print!("{} ", v.get(it)?);
        it.inc();
    }
    println!();

    print!("Backward: ");
    while it != v.begin() {
        it.dec();
        print!("{} ", v.get(it)?);
    }
    println!();

    let first = v.begin();
    v.push_back(9.0)?;
    match v.get(first) {
        Ok(x) => println!("Cursor still valid: {}", x),
        Err(err) => println!("After growth: {}", err),
    }
    Ok(())
}
