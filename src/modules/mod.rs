pub mod bookings;
pub mod destinations;
pub mod seed;
pub mod trips;

use yatra_kernel::ModuleRegistry;

/// Register every resource module with the registry.
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(destinations::create_module());
    registry.register(trips::create_module());
    registry.register(bookings::create_module());
    registry.register(seed::create_module());
}
