mod common;

#[cfg(test)]
mod test_resolver;


#[cfg(test)]
mod test_stats;

#[cfg(test)]
mod test_constraints;
