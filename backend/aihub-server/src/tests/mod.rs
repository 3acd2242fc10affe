mod session_registry;
