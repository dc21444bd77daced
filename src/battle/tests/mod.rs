pub mod common;



#[cfg(test)]
mod test_status_moves;


#[cfg(test)]
mod test_registry;
