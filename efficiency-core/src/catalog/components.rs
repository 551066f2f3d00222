use crate::domain::{ComponentBreakdown, ComponentSlots};

const AIR_CONDITIONER: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Compressor", "Fixed-speed Rotary"),
        ("Condenser Coil", "Aluminium"),
        ("Refrigerant", "R22"),
        ("Filter", "Mesh Filter"),
        ("Sensor", "Mechanical Thermostat"),
        ("Motor", "AC Induction"),
        ("Controller", "Manual Knob"),
        ("Expansion Valve", "Capillary Tube"),
        ("Housing", "Basic Plastic"),
        ("Noise Level", "High"),
    ]),
    modern: ComponentSlots(&[
        ("Compressor", "Inverter Rotary"),
        ("Condenser Coil", "Copper (Blue Fin)"),
        ("Refrigerant", "R32 Eco"),
        ("Filter", "PM2.5 Filter"),
        ("Sensor", "Digital Thermistor"),
        ("Motor", "BLDC"),
        ("Controller", "Digital Thermostat"),
        ("Expansion Valve", "Electronic"),
        ("Housing", "ABS Plastic"),
        ("Noise Level", "Low"),
    ]),
    updated: ComponentSlots(&[
        ("Compressor", "AI Variable Scroll Compressor"),
        ("Condenser Coil", "Nano-Coated Copper"),
        ("Refrigerant", "R290 (Ultra-Low GWP)"),
        ("Filter", "HEPA + UV Sterilization"),
        ("Sensor", "IoT Smart Multi-Sensor"),
        ("Motor", "BLDC SmartSync"),
        ("Controller", "AI Adaptive Voice/App"),
        ("Expansion Valve", "Smart Proportional Valve"),
        ("Housing", "Recyclable Biopolymer"),
        ("Noise Level", "Whisper Mode"),
        ("Connectivity", "Wi-Fi + Cloud Learning"),
        ("Cooling Mode", "Self-Optimizing Adaptive Cooling"),
    ]),
};

const REFRIGERATOR: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Compressor", "Reciprocating"),
        ("Refrigerant", "R134a"),
        ("Coil", "Bare Metal"),
        ("Thermostat", "Manual Dial"),
        ("Lighting", "Incandescent Bulb"),
        ("Defrost", "Manual"),
        ("Shelves", "Plastic"),
        ("Door Seal", "Rubber"),
        ("Insulation", "PU Foam"),
        ("Motor", "Fixed Speed"),
    ]),
    modern: ComponentSlots(&[
        ("Compressor", "Digital Inverter"),
        ("Refrigerant", "R600a"),
        ("Coil", "Aluminium Alloy"),
        ("Thermostat", "Electronic"),
        ("Lighting", "LED"),
        ("Defrost", "Auto"),
        ("Shelves", "Tempered Glass"),
        ("Door Seal", "Anti-bacterial"),
        ("Insulation", "High-Density Foam"),
        ("Motor", "Variable Speed"),
    ]),
    updated: ComponentSlots(&[
        ("Compressor", "AI Linear Compressor"),
        ("Refrigerant", "R1234yf (Green Blend)"),
        ("Coil", "Graphene Alloy Coil"),
        ("Thermostat", "AI Predictive Control"),
        ("Lighting", "Smart Adaptive LED"),
        ("Defrost", "AI Auto Defrost"),
        ("Shelves", "Smart Weight Sensors"),
        ("Door Seal", "Self-Healing Magnetic Seal"),
        ("Insulation", "Vacuum Nano Insulation"),
        ("Motor", "EcoSynch Variable Drive"),
        ("Connectivity", "IoT + Inventory Tracking"),
        ("Control System", "App + Voice Integration"),
    ]),
};

const WASHING_MACHINE: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Motor", "Belt-Driven AC Motor"),
        ("Drum", "Plastic"),
        ("Control", "Manual Knob"),
        ("Heater", "Fixed Resistive Coil"),
        ("Pump", "Fixed-Speed"),
        ("Sensor", "Mechanical Timer"),
        ("Panel", "Analog"),
        ("Drive Type", "Belt Drive"),
        ("Water Valve", "Basic Solenoid"),
        ("Body", "Plastic Frame"),
    ]),
    modern: ComponentSlots(&[
        ("Motor", "Inverter Direct Drive"),
        ("Drum", "Steel Drum"),
        ("Control", "Digital Panel"),
        ("Heater", "Ceramic Heater"),
        ("Pump", "Variable-Speed"),
        ("Sensor", "Load Sensor"),
        ("Panel", "Touch Control"),
        ("Drive Type", "Direct Drive"),
        ("Water Valve", "Electronic"),
        ("Body", "Stainless Steel"),
    ]),
    updated: ComponentSlots(&[
        ("Motor", "AI Direct Drive BLDC"),
        ("Drum", "NanoShield Stainless Steel"),
        ("Control", "AI Predictive Smart Panel"),
        ("Heater", "Self-Cleaning Ceramic"),
        ("Pump", "EcoSense Adaptive Flow"),
        ("Sensor", "AI Load + Dirt Sensors"),
        ("Panel", "Smart Touch + App"),
        ("Drive Type", "Sensorless Torque Control"),
        ("Water Valve", "Smart Flow Valve"),
        ("Body", "Recycled Polycomposite"),
        ("Connectivity", "IoT + Self Diagnostics"),
        ("Eco Wash", "Auto Optimize Water/Energy"),
    ]),
};

const FAN: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Motor", "AC Induction"),
        ("Blade", "Metal"),
        ("Speed Control", "Manual Regulator"),
        ("Bearings", "Friction Bearings"),
        ("Body", "Iron"),
        ("Mounting", "Fixed Rod"),
        ("Power Supply", "AC 230V"),
        ("Protection", "Basic Grill"),
        ("Noise", "High"),
        ("Efficiency", "Low"),
    ]),
    modern: ComponentSlots(&[
        ("Motor", "BLDC"),
        ("Blade", "Polymer"),
        ("Speed Control", "Remote"),
        ("Bearings", "Ball Bearings"),
        ("Body", "Plastic"),
        ("Mounting", "Adjustable Rod"),
        ("Power Supply", "DC Converter"),
        ("Protection", "Safety Grill"),
        ("Noise", "Low"),
        ("Efficiency", "High"),
    ]),
    updated: ComponentSlots(&[
        ("Motor", "Smart BLDC IoT Motor"),
        ("Blade", "Carbon Fiber Aero Design"),
        ("Speed Control", "Smart Remote + App"),
        ("Bearings", "Sealed Ceramic Bearings"),
        ("Body", "Recyclable Alloy"),
        ("Mounting", "Smart Adjustable Mount"),
        ("Power Supply", "DC + Solar Backup"),
        ("Protection", "Smart Obstruction Sensor"),
        ("Noise", "Silent"),
        ("Efficiency", "Super High"),
        ("Sensors", "Temperature + Motion Sensors"),
        ("Connectivity", "IoT + Voice Command"),
    ]),
};

const TELEVISION: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Display", "CRT"),
        ("Backlight", "Cathode Ray"),
        ("Resolution", "480p"),
        ("Panel Type", "Glass Tube"),
        ("Audio", "Mono"),
        ("Connectivity", "RF Only"),
        ("Frame", "Plastic"),
        ("Input", "AV Ports"),
        ("Energy", "High"),
        ("Color Depth", "Limited"),
    ]),
    modern: ComponentSlots(&[
        ("Display", "LED"),
        ("Backlight", "Edge LED"),
        ("Resolution", "4K UHD"),
        ("Panel Type", "Flat Panel"),
        ("Audio", "Stereo"),
        ("Connectivity", "HDMI / USB"),
        ("Frame", "Metal"),
        ("Input", "Multiple Ports"),
        ("Energy", "Moderate"),
        ("Color Depth", "Wide Gamut"),
    ]),
    updated: ComponentSlots(&[
        ("Display", "Quantum Dot OLED"),
        ("Backlight", "Self-Emissive"),
        ("Resolution", "8K Adaptive"),
        ("Panel Type", "Ultra Thin Flexible"),
        ("Audio", "Dolby Atmos AI Surround"),
        ("Connectivity", "Wi-Fi 6 / Bluetooth 5.3"),
        ("Frame", "Carbon Fiber Edge"),
        ("Input", "Wireless + HDMI 2.2"),
        ("Energy", "Optimized AI"),
        ("Color Depth", "1B+ Colors"),
        ("Processor", "Neural Image Processor"),
        ("Smart OS", "AI Vision Interface"),
    ]),
};

const COMPUTER: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("CPU", "Intel Core 2 Duo"),
        ("Cooling", "Fan-based"),
        ("Power Supply", "400W ATX"),
        ("Storage", "HDD"),
        ("GPU", "Integrated Basic"),
        ("RAM", "DDR2"),
        ("Motherboard", "Non-Optimized PCB"),
        ("OS", "Legacy OS"),
        ("Connectivity", "Ethernet Only"),
        ("Case", "Steel Chassis"),
    ]),
    modern: ComponentSlots(&[
        ("CPU", "i7 / Ryzen 7"),
        ("Cooling", "Heat Pipe + Fan"),
        ("Power Supply", "650W Modular"),
        ("Storage", "SSD"),
        ("GPU", "Dedicated"),
        ("RAM", "DDR4"),
        ("Motherboard", "Energy Efficient PCB"),
        ("OS", "Windows / Linux"),
        ("Connectivity", "Wi-Fi 6 + Bluetooth 5"),
        ("Case", "Aluminum"),
    ]),
    updated: ComponentSlots(&[
        ("CPU", "AI Edge Processor (ARM + Neural Cores)"),
        ("Cooling", "Liquid + AI-Control"),
        ("Power Supply", "USB-C PD + Renewable Input"),
        ("Storage", "NVMe Gen5 SSD"),
        ("GPU", "Integrated Neural GPU"),
        ("RAM", "LPDDR5x Adaptive"),
        ("Motherboard", "Graphene-Based Eco Board"),
        ("OS", "Edge AI OS"),
        ("Connectivity", "Wi-Fi 7 + 6G Ready"),
        ("Case", "Recycled Carbon Fiber"),
        ("Sensors", "Thermal + Usage AI Sensors"),
        ("Cloud Sync", "Auto Backup + Optimization"),
    ]),
};

const LIGHTING: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Type", "CFL"),
        ("Efficiency", "60 lm/W"),
        ("Base", "E27 Screw"),
        ("Driver", "Magnetic Ballast"),
        ("Color", "Warm White"),
        ("Material", "Glass"),
        ("Power", "High"),
        ("Life", "6,000 hrs"),
        ("Control", "Switch"),
        ("Heat", "Moderate"),
    ]),
    modern: ComponentSlots(&[
        ("Type", "LED"),
        ("Efficiency", "110 lm/W"),
        ("Base", "B22 Bayonet"),
        ("Driver", "Electronic"),
        ("Color", "Cool White"),
        ("Material", "Plastic"),
        ("Power", "Low"),
        ("Life", "25,000 hrs"),
        ("Control", "Dimmable Switch"),
        ("Heat", "Low"),
    ]),
    updated: ComponentSlots(&[
        ("Type", "Smart Adaptive LED"),
        ("Efficiency", "140 lm/W"),
        ("Base", "Smart Wireless Base"),
        ("Driver", "IoT Adaptive Driver"),
        ("Color", "Dynamic RGB + Circadian"),
        ("Material", "Recycled Polymer"),
        ("Power", "Ultra Low"),
        ("Life", "50,000 hrs"),
        ("Control", "App + Voice"),
        ("Heat", "Negligible"),
        ("Sensors", "Light + Occupancy Sensors"),
        ("Connectivity", "Wi-Fi + Cloud Sync"),
    ]),
};

const COOKING_APPLIANCE: ComponentBreakdown = ComponentBreakdown {
    old: ComponentSlots(&[
        ("Heating", "Convection Coil"),
        ("Surface", "Metal"),
        ("Control", "Knob"),
        ("Safety", "Thermal Fuse"),
        ("Material", "Steel"),
        ("Timer", "Manual"),
        ("Sensor", "None"),
        ("Power", "High"),
        ("Body", "Plastic Frame"),
        ("Efficiency", "Low"),
    ]),
    modern: ComponentSlots(&[
        ("Heating", "Induction"),
        ("Surface", "Ceramic"),
        ("Control", "Touch"),
        ("Safety", "Auto Shutoff"),
        ("Material", "Glass"),
        ("Timer", "Digital"),
        ("Sensor", "Temperature Sensor"),
        ("Power", "Moderate"),
        ("Body", "Steel + Glass"),
        ("Efficiency", "High"),
    ]),
    updated: ComponentSlots(&[
        ("Heating", "AI Induction Magnetic Field"),
        ("Surface", "Nano-Coated Ceramic"),
        ("Control", "Smart Touch + App"),
        ("Safety", "AI Auto Detection"),
        ("Material", "Recycled Glass Ceramic"),
        ("Timer", "Adaptive Predictive"),
        ("Sensor", "Smart Cooking Sensors"),
        ("Power", "Auto Adjust"),
        ("Body", "Eco Alloy Frame"),
        ("Efficiency", "Ultra High"),
        ("Connectivity", "IoT Cloud Recipes"),
        ("Assistant", "Voice Cooking Guide"),
    ]),
};

/// Component breakdowns keyed by category, in catalog order.
pub(super) static BREAKDOWNS: [(&str, ComponentBreakdown); 8] = [
    ("Air Conditioner", AIR_CONDITIONER),
    ("Refrigerator", REFRIGERATOR),
    ("Washing Machine", WASHING_MACHINE),
    ("Fan", FAN),
    ("Television", TELEVISION),
    ("Computer", COMPUTER),
    ("Lighting", LIGHTING),
    ("Cooking Appliance", COOKING_APPLIANCE),
];
