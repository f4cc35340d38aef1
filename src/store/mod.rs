mod cache;

#[cfg(not(test))]
mod remote;

#[cfg(not(test))]
pub type Store = remote::RemoteStore;

#[cfg(test)]
mod memory;

#[cfg(test)]
pub type Store = memory::MemoryStore;
