mod route_table;
