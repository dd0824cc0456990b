/// Read/write access to a value owned somewhere else.
///
/// The picker reads the current selection through a binding and writes the
/// tapped tag back into it; it never keeps a copy.
#[derive(Debug)]
pub struct Binding<'a, V> {
    value: &'a mut V,
}

impl<'a, V> Binding<'a, V> {
    pub fn new(value: &'a mut V) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &V {
        self.value
    }

    pub fn set(&mut self, value: V) {
        *self.value = value;
    }
}
